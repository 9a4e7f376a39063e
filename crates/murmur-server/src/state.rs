//! Shared request-handler state.

use std::sync::Arc;

use murmur_cascade::{TierModels, TranscribeBackend};
use murmur_settings::Settings;

/// Process-wide read-only state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration.
    pub settings: Arc<Settings>,
    /// Remote transcription backend.
    pub backend: Arc<dyn TranscribeBackend>,
    /// Tier bindings derived from settings.
    pub models: Arc<TierModels>,
}

impl AppState {
    /// Wire settings and a backend into handler state.
    #[must_use]
    pub fn new(settings: Arc<Settings>, backend: Arc<dyn TranscribeBackend>) -> Self {
        let models = Arc::new(TierModels {
            primary: settings.primary_model.clone(),
            secondary: settings.secondary_model.clone(),
            tertiary: settings.tertiary_model.clone(),
        });
        Self {
            settings,
            backend,
            models,
        }
    }
}
