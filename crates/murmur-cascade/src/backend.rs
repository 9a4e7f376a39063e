//! Backend seam between the cascade policy and the remote service client.

use std::path::Path;

use async_trait::async_trait;

/// Failure from a single backend attempt.
///
/// `retryable` is decided by the client from the remote status code:
/// service unavailability, rate limiting, or a missing resource (HTTP
/// 503, 429, 404) — failures independent of the audio content itself.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    /// Human-readable cause, surfaced verbatim to the caller.
    pub message: String,
    /// Whether the failure was availability-related rather than
    /// content-related.
    pub retryable: bool,
}

impl BackendError {
    /// Availability-related failure; escalation past Primary is allowed.
    #[must_use]
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    /// Content-level failure; a different model would fail identically.
    #[must_use]
    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }
}

/// One transcription attempt against a specific remote model.
///
/// Implementations upload the audio content fresh on every call;
/// uploads are never reused across tiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscribeBackend: Send + Sync {
    /// Transcribe the audio file at `audio_path` with `model`.
    async fn transcribe(
        &self,
        audio_path: &Path,
        mime_type: &str,
        model: &str,
    ) -> Result<String, BackendError>;
}
