//! Account Service
//!
//! Sign-up, sign-in and profile persistence built on the three backend
//! ports. Each flow stops at the first failing call and reports it as an
//! [`AccountError`]; nothing is retried.

use std::sync::Arc;

use shared_types::User;
use tracing::{error, info, warn};

use crate::domain::errors::auth_message;
use crate::domain::{
    id_proof_path, user_from_record, AccountError, AuthUser, Credentials, IdProofFile,
    ProfileDraft, ProfileRecord, ProfileSaveResult,
};
use crate::ports::{AuthProvider, FileStorage, ProfileRepository};

/// Message returned by a successful [`AccountService::save_profile`].
pub const PROFILE_SAVED: &str = "Profile updated successfully.";

/// Account flows over the backend ports.
#[derive(Clone)]
pub struct AccountService {
    auth: Arc<dyn AuthProvider>,
    storage: Arc<dyn FileStorage>,
    profiles: Arc<dyn ProfileRepository>,
    id_proof_bucket: String,
}

impl AccountService {
    /// Service over separate port implementations.
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        storage: Arc<dyn FileStorage>,
        profiles: Arc<dyn ProfileRepository>,
        id_proof_bucket: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            storage,
            profiles,
            id_proof_bucket: id_proof_bucket.into(),
        }
    }

    /// Service over one adapter implementing every port.
    pub fn from_backend<B>(backend: Arc<B>, id_proof_bucket: impl Into<String>) -> Self
    where
        B: AuthProvider + FileStorage + ProfileRepository + 'static,
    {
        Self::new(
            backend.clone(),
            backend.clone(),
            backend,
            id_proof_bucket,
        )
    }

    /// Register a worker.
    ///
    /// Order: auth sign-up, identity-proof upload, public URL, initial
    /// profile row. The document is required before anything is sent.
    pub async fn sign_up(
        &self,
        credentials: &Credentials,
        id_proof: Option<IdProofFile>,
    ) -> Result<AuthUser, AccountError> {
        let Some(id_proof) = id_proof else {
            return Err(AccountError::MissingIdProof);
        };

        let user = self
            .auth
            .sign_up(&credentials.email, &credentials.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Sign-up rejected");
                AccountError::SignUp(auth_message(&e, "Sign up failed"))
            })?;

        let path = id_proof_path(&user.id, &id_proof);
        self.storage
            .upload_file(
                &self.id_proof_bucket,
                &path,
                id_proof.bytes,
                &id_proof.content_type,
                true,
            )
            .await
            .map_err(|e| {
                error!(user_id = %user.id, %path, error = %e, "ID proof upload failed");
                AccountError::Upload(e.to_string())
            })?;

        let id_proof_url = self.storage.public_url(&self.id_proof_bucket, &path);
        let record = ProfileRecord::initial(
            &user.id,
            &credentials.name,
            &credentials.email,
            id_proof_url,
        );
        self.profiles
            .upsert_profile_record(&record)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Initial profile save failed");
                AccountError::SaveProfile(e.to_string())
            })?;

        info!(user_id = %user.id, "Worker signed up");
        Ok(user)
    }

    /// Authenticate and build the local user from the stored profile row.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, AccountError> {
        let auth = self
            .auth
            .sign_in_with_password(&credentials.email, &credentials.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Sign-in rejected");
                AccountError::SignIn(auth_message(&e, "Login failed"))
            })?;

        let record = self
            .profiles
            .fetch_profile_record(&auth.id)
            .await
            .map_err(|e| {
                error!(user_id = %auth.id, error = %e, "Profile fetch failed");
                AccountError::FetchProfile(e.to_string())
            })?;

        let user = user_from_record(
            &auth,
            record.as_ref(),
            &credentials.name,
            &credentials.email,
        );
        info!(
            user_id = %user.id,
            status = %user.status,
            profile_complete = user.profile_complete,
            "Worker signed in"
        );
        Ok(user)
    }

    /// Upsert the worker's profile row.
    pub async fn save_profile(&self, user_id: &str, draft: ProfileDraft) -> ProfileSaveResult {
        let record = draft.into_record(user_id);
        match self.profiles.upsert_profile_record(&record).await {
            Ok(()) => {
                info!(user_id, "Profile saved");
                ProfileSaveResult {
                    success: true,
                    message: PROFILE_SAVED.to_string(),
                }
            }
            Err(e) => {
                error!(user_id, error = %e, "Profile save failed");
                ProfileSaveResult {
                    success: false,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Stored profile row, or `None` when absent or unreadable.
    pub async fn load_profile(&self, user_id: &str) -> Option<ProfileRecord> {
        match self.profiles.fetch_profile_record(user_id).await {
            Ok(record) => record,
            Err(e) => {
                error!(user_id, error = %e, "Profile load failed");
                None
            }
        }
    }
}
