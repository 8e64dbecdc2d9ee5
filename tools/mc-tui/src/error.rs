//! Front-end errors.

use std::path::PathBuf;

use mc_02_backend::{BackendError, ConfigError};
use thiserror::Error;

/// Errors raised outside the account flows.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or input failed.
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// Backend settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backend client could not be built.
    #[error("Backend client could not be created: {0}")]
    Backend(#[from] BackendError),

    /// The identity-proof file could not be read.
    #[error("Cannot read ID proof {}: {source}", path.display())]
    IdProof {
        /// Path as typed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
