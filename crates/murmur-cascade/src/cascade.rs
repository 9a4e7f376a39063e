//! Sequential fallback over the model tiers.

use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::backend::{BackendError, TranscribeBackend};
use crate::tier::{Tier, TierModels};

/// Fixed instruction sent with every attempt.
pub const TRANSCRIBE_PROMPT: &str = "Transcribe this audio exactly word-for-word.";

/// Successful outcome: text plus the tier and model that produced it.
///
/// Produced by exactly one successful remote call; immutable once
/// created.
#[derive(Debug, Clone)]
pub struct Transcription {
    /// The transcribed text.
    pub text: String,
    /// Tier that produced the result.
    pub tier: Tier,
    /// Model identifier bound to that tier.
    pub model: String,
}

/// Terminal failure of the whole cascade.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    /// Primary failed for a content-level reason; lower tiers were
    /// never tried.
    #[error("{0}")]
    Fatal(BackendError),

    /// Every tier failed; carries the last tier's error as root cause.
    #[error("all tiers exhausted: {source}")]
    Exhausted {
        /// Error from the final (Tertiary) attempt.
        source: BackendError,
    },
}

/// Whether a Primary failure permits escalation to Secondary.
///
/// Pure classification: only availability-style failures escalate.
/// A content-level failure would fail identically on every model, so
/// burning fallback attempts on it buys nothing.
#[must_use]
pub fn escalation_allowed(err: &BackendError) -> bool {
    err.retryable
}

/// Try Primary, then Secondary, then Tertiary, returning the first
/// success.
///
/// Success is terminal at any tier. Classification gates only the
/// Primary→Secondary transition; once past Primary every remaining
/// tier is tried unconditionally, since at that point availability
/// matters more than precision. Attempts are strictly sequential and
/// each performs a fresh upload.
#[instrument(skip(backend, models))]
pub async fn run_cascade(
    backend: &dyn TranscribeBackend,
    models: &TierModels,
    audio_path: &Path,
    mime_type: &str,
) -> Result<Transcription, CascadeError> {
    let primary_err = match attempt(backend, models, Tier::Primary, audio_path, mime_type).await {
        Ok(t) => return Ok(t),
        Err(e) => e,
    };

    if !escalation_allowed(&primary_err) {
        warn!(error = %primary_err, "primary failed on content, not escalating");
        return Err(CascadeError::Fatal(primary_err));
    }
    warn!(error = %primary_err, "primary unavailable, escalating");

    match attempt(backend, models, Tier::Secondary, audio_path, mime_type).await {
        Ok(t) => return Ok(t),
        Err(e) => warn!(error = %e, "secondary failed, escalating"),
    }

    match attempt(backend, models, Tier::Tertiary, audio_path, mime_type).await {
        Ok(t) => Ok(t),
        Err(e) => {
            error!(error = %e, "all tiers failed");
            Err(CascadeError::Exhausted { source: e })
        }
    }
}

/// One attempt against the model bound to `tier`.
async fn attempt(
    backend: &dyn TranscribeBackend,
    models: &TierModels,
    tier: Tier,
    audio_path: &Path,
    mime_type: &str,
) -> Result<Transcription, BackendError> {
    let model = models.model_for(tier);
    info!(%tier, model, "attempting transcription");
    let text = backend.transcribe(audio_path, mime_type, model).await?;
    Ok(Transcription {
        text,
        tier,
        model: model.to_string(),
    })
}
