//! # murmur-settings
//!
//! Process-wide configuration, read once at startup and injected into
//! handlers as an immutable value. There is no reload path: everything
//! here is fixed for the life of the process.
//!
//! `GEMINI_API_KEY` is required; `APP_SECRET` is optional and its
//! absence disables the secret guard (dev mode). Remaining knobs have
//! compiled defaults.
//!
//! ## Crate Position
//!
//! Standalone. Depended on by: murmur-server, murmur.

#![deny(unsafe_code)]

use std::path::PathBuf;

/// Required: API key for the remote transcription service.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Optional: shared secret enforced by the guard; unset disables it.
pub const ENV_APP_SECRET: &str = "APP_SECRET";
/// Optional: model identifier for the Primary tier.
pub const ENV_PRIMARY_MODEL: &str = "MURMUR_PRIMARY_MODEL";
/// Optional: model identifier for the Secondary tier.
pub const ENV_SECONDARY_MODEL: &str = "MURMUR_SECONDARY_MODEL";
/// Optional: model identifier for the Tertiary tier.
pub const ENV_TERTIARY_MODEL: &str = "MURMUR_TERTIARY_MODEL";
/// Optional: directory for scratch copies of uploads.
pub const ENV_SCRATCH_DIR: &str = "MURMUR_SCRATCH_DIR";
/// Optional: listen address.
pub const ENV_BIND: &str = "MURMUR_BIND";
/// Optional: API origin override (used by tests and proxies).
pub const ENV_BASE_URL: &str = "MURMUR_GEMINI_BASE_URL";

const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_SECONDARY_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TERTIARY_MODEL: &str = "gemini-2.5-flash-lite";
const DEFAULT_SCRATCH_DIR: &str = "temp_processing";
const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Immutable startup configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for the remote transcription service.
    pub api_key: String,
    /// Shared secret for inbound requests; `None` disables the guard.
    pub app_secret: Option<String>,
    /// Model serving the Primary tier.
    pub primary_model: String,
    /// Model serving the Secondary tier.
    pub secondary_model: String,
    /// Model serving the Tertiary tier.
    pub tertiary_model: String,
    /// Directory holding request-scoped scratch files.
    pub scratch_dir: PathBuf,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Remote API origin override.
    pub base_url: Option<String>,
}

/// Configuration failure at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The required API key variable is unset or empty.
    #[error("{ENV_API_KEY} not set")]
    MissingApiKey,
}

impl Settings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from a lookup function.
    ///
    /// Tests pass a closure over a map instead of mutating process
    /// environment, which would race across parallel test threads.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let nonempty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = nonempty(ENV_API_KEY).ok_or(SettingsError::MissingApiKey)?;

        // Empty string counts as unset, same as the guard being off.
        let app_secret = nonempty(ENV_APP_SECRET);
        if app_secret.is_none() {
            tracing::warn!("{ENV_APP_SECRET} not set, secret guard disabled");
        }

        Ok(Self {
            api_key,
            app_secret,
            primary_model: nonempty(ENV_PRIMARY_MODEL)
                .unwrap_or_else(|| DEFAULT_PRIMARY_MODEL.into()),
            secondary_model: nonempty(ENV_SECONDARY_MODEL)
                .unwrap_or_else(|| DEFAULT_SECONDARY_MODEL.into()),
            tertiary_model: nonempty(ENV_TERTIARY_MODEL)
                .unwrap_or_else(|| DEFAULT_TERTIARY_MODEL.into()),
            scratch_dir: nonempty(ENV_SCRATCH_DIR)
                .map_or_else(|| PathBuf::from(DEFAULT_SCRATCH_DIR), PathBuf::from),
            bind_addr: nonempty(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.into()),
            base_url: nonempty(ENV_BASE_URL),
        })
    }

    /// Whether the secret guard is enforcing.
    #[must_use]
    pub fn security_enabled(&self) -> bool {
        self.app_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_a_startup_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, SettingsError::MissingApiKey);
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let err = Settings::from_lookup(lookup_from(&[(ENV_API_KEY, "")])).unwrap_err();
        assert_eq!(err, SettingsError::MissingApiKey);
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[(ENV_API_KEY, "k")])).unwrap();
        assert_eq!(settings.api_key, "k");
        assert!(settings.app_secret.is_none());
        assert!(!settings.security_enabled());
        assert_eq!(settings.primary_model, "gemini-2.5-pro");
        assert_eq!(settings.secondary_model, "gemini-2.5-flash");
        assert_eq!(settings.tertiary_model, "gemini-2.5-flash-lite");
        assert_eq!(settings.scratch_dir, PathBuf::from("temp_processing"));
        assert_eq!(settings.bind_addr, "0.0.0.0:8000");
        assert!(settings.base_url.is_none());
    }

    #[test]
    fn secret_enables_the_guard() {
        let settings =
            Settings::from_lookup(lookup_from(&[(ENV_API_KEY, "k"), (ENV_APP_SECRET, "abc123")]))
                .unwrap();
        assert_eq!(settings.app_secret.as_deref(), Some("abc123"));
        assert!(settings.security_enabled());
    }

    #[test]
    fn empty_secret_counts_as_unset() {
        let settings =
            Settings::from_lookup(lookup_from(&[(ENV_API_KEY, "k"), (ENV_APP_SECRET, "")]))
                .unwrap();
        assert!(!settings.security_enabled());
    }

    #[test]
    fn overrides_replace_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_PRIMARY_MODEL, "model-a"),
            (ENV_SECONDARY_MODEL, "model-b"),
            (ENV_TERTIARY_MODEL, "model-c"),
            (ENV_SCRATCH_DIR, "/tmp/murmur-scratch"),
            (ENV_BIND, "127.0.0.1:9000"),
            (ENV_BASE_URL, "http://localhost:4010"),
        ]))
        .unwrap();
        assert_eq!(settings.primary_model, "model-a");
        assert_eq!(settings.secondary_model, "model-b");
        assert_eq!(settings.tertiary_model, "model-c");
        assert_eq!(settings.scratch_dir, PathBuf::from("/tmp/murmur-scratch"));
        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:4010"));
    }
}
