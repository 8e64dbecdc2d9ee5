//! # Outbound Ports (Driven Ports)
//!
//! The hosted service splits into three capabilities. Each is its own
//! trait so tests can fail one without faking the others.
//!
//! Production: [`ManagedBackendClient`](crate::adapters::ManagedBackendClient)
//! Testing / demo: [`InMemoryBackend`](crate::adapters::InMemoryBackend)

use async_trait::async_trait;

use crate::domain::{AuthUser, BackendError, ProfileRecord};

/// Email/password authentication.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new account.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError>;

    /// Authenticate an existing account.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, BackendError>;
}

/// Object storage.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `bytes` at `path` in `bucket`, replacing any object there when
    /// `upsert` is set.
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), BackendError>;

    /// Public URL of an object. Pure string building; the object need not exist.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// The worker profile table.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert or merge the row keyed by `record.user_id`.
    async fn upsert_profile_record(&self, record: &ProfileRecord) -> Result<(), BackendError>;

    /// Row for `user_id`, if any. More than one row is an error.
    async fn fetch_profile_record(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileRecord>, BackendError>;
}
