//! # MC-02 Managed Backend
//!
//! Client side of the hosted authentication / database / file-storage
//! service the application persists to.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Sign workers up (with an identity-proof upload) and in
//! - Read and upsert the worker's row in the `maids` profile table
//! - Map that row onto the local [`shared_types::User`], deriving
//!   completeness through the shared rule
//!
//! The backend itself is opaque: every call either succeeds or yields an
//! error whose message is shown to the user. No retries.
//!
//! ## Module Structure
//!
//! ```text
//! mc-02-backend/
//! ├── domain/          # ProfileRecord, AuthUser, record → User mapping, errors
//! ├── ports/           # AuthProvider, FileStorage, ProfileRepository
//! ├── adapters/        # HTTP client, in-memory backend
//! └── service.rs       # AccountService: sign-up / sign-in / profile flows
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{BackendOperation, InMemoryBackend, ManagedBackendClient};
pub use config::{BackendConfig, ConfigError};
pub use domain::{
    id_proof_path, user_from_record, AccountError, AuthUser, BackendError, Credentials,
    IdProofFile, ProfileDraft, ProfileRecord, ProfileSaveResult, Skillset,
};
pub use ports::{AuthProvider, FileStorage, ProfileRepository};
pub use service::{AccountService, PROFILE_SAVED};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
