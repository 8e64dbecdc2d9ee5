//! # Backend Configuration
//!
//! Connection settings for the managed backend.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `MC_BACKEND_URL` | `base_url` |
//! | `MC_BACKEND_ANON_KEY` | `anon_key` |
//! | `MC_PROFILE_TABLE` | `profile_table` |
//! | `MC_ID_PROOF_BUCKET` | `id_proof_bucket` |
//! | `MC_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No backend URL configured.
    #[error("Backend URL is not set. Set MC_BACKEND_URL or run with --demo.")]
    MissingUrl,

    /// URL is not http(s).
    #[error("Backend URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),

    /// No public API key configured.
    #[error("Backend API key is not set. Set MC_BACKEND_ANON_KEY.")]
    MissingApiKey,
}

/// Managed backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.example.co`.
    pub base_url: String,
    /// Public (anonymous) API key sent with every request.
    pub anon_key: String,
    /// Table holding worker profiles.
    pub profile_table: String,
    /// Storage bucket for identity-proof documents.
    pub id_proof_bucket: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            profile_table: "maids".to_string(),
            id_proof_bucket: "idproofs".to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 3,
        }
    }
}

impl BackendConfig {
    /// Defaults overridden from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MC_BACKEND_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(key) = std::env::var("MC_BACKEND_ANON_KEY") {
            config.anon_key = key;
        }
        if let Ok(table) = std::env::var("MC_PROFILE_TABLE") {
            config.profile_table = table;
        }
        if let Ok(bucket) = std::env::var("MC_ID_PROOF_BUCKET") {
            config.id_proof_bucket = bucket;
        }
        if let Ok(timeout) = std::env::var("MC_REQUEST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "MC_REQUEST_TIMEOUT_SECS is not a number"),
            }
        }

        config
    }

    /// Check the settings needed to reach a real backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }
        if self.anon_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}
