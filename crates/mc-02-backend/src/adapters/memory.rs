//! In-process backend.
//!
//! Implements all three ports over hash maps. Used by the test suites and
//! by `--demo`, where it is seeded with one account.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{AuthUser, BackendError, ProfileRecord};
use crate::ports::{AuthProvider, FileStorage, ProfileRepository};

/// Port call that can be made to fail once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOperation {
    /// `AuthProvider::sign_up`
    SignUp,
    /// `AuthProvider::sign_in_with_password`
    SignIn,
    /// `FileStorage::upload_file`
    Upload,
    /// `ProfileRepository::upsert_profile_record`
    UpsertProfile,
    /// `ProfileRepository::fetch_profile_record`
    FetchProfile,
}

#[derive(Debug, Clone)]
struct Account {
    user: AuthUser,
    password: String,
}

/// Stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// MIME type given at upload.
    pub content_type: String,
    /// Contents.
    pub bytes: Vec<u8>,
}

/// Backend held entirely in memory.
#[derive(Default)]
pub struct InMemoryBackend {
    accounts: RwLock<HashMap<String, Account>>,
    objects: RwLock<HashMap<(String, String), StoredObject>>,
    profiles: RwLock<HashMap<String, ProfileRecord>>,
    failures: RwLock<HashMap<BackendOperation, String>>,
    calls: RwLock<Vec<BackendOperation>>,
}

impl InMemoryBackend {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. `profile` receives the generated id and may
    /// return a row to store for it.
    pub fn with_account(
        self,
        email: &str,
        password: &str,
        profile: impl FnOnce(&str) -> Option<ProfileRecord>,
    ) -> Self {
        let id = Uuid::new_v4().to_string();
        if let Some(record) = profile(&id) {
            self.profiles.write().insert(id.clone(), record);
        }
        self.accounts.write().insert(
            email.to_string(),
            Account {
                user: AuthUser {
                    id,
                    email: email.to_string(),
                },
                password: password.to_string(),
            },
        );
        self
    }

    /// Make the next call of `operation` fail with `message`.
    pub fn fail_next(&self, operation: BackendOperation, message: impl Into<String>) {
        self.failures.write().insert(operation, message.into());
    }

    /// Every port call made so far, in order.
    pub fn calls(&self) -> Vec<BackendOperation> {
        self.calls.read().clone()
    }

    /// Stored profile row for `user_id`.
    pub fn profile(&self, user_id: &str) -> Option<ProfileRecord> {
        self.profiles.read().get(user_id).cloned()
    }

    /// Stored object at `bucket` / `path`.
    pub fn object(&self, bucket: &str, path: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .get(&(bucket.to_string(), path.to_string()))
            .cloned()
    }

    /// Buckets that hold at least one object.
    pub fn buckets(&self) -> HashSet<String> {
        self.objects.read().keys().map(|(b, _)| b.clone()).collect()
    }

    fn enter(&self, operation: BackendOperation) -> Result<(), BackendError> {
        self.calls.write().push(operation);
        match self.failures.write().remove(&operation) {
            Some(message) => {
                debug!(?operation, %message, "Injected failure");
                Err(BackendError::rejected(500, message))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthProvider for InMemoryBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        self.enter(BackendOperation::SignUp)?;
        let mut accounts = self.accounts.write();
        if accounts.contains_key(email) {
            return Err(BackendError::rejected(422, "User already registered"));
        }
        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        accounts.insert(
            email.to_string(),
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, BackendError> {
        self.enter(BackendOperation::SignIn)?;
        match self.accounts.read().get(email) {
            Some(account) if account.password == password => Ok(account.user.clone()),
            _ => Err(BackendError::rejected(400, "Invalid login credentials")),
        }
    }
}

#[async_trait]
impl FileStorage for InMemoryBackend {
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), BackendError> {
        self.enter(BackendOperation::Upload)?;
        let key = (bucket.to_string(), path.to_string());
        let mut objects = self.objects.write();
        if !upsert && objects.contains_key(&key) {
            return Err(BackendError::rejected(409, "The resource already exists"));
        }
        objects.insert(
            key,
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("memory://{bucket}/{path}")
    }
}

#[async_trait]
impl ProfileRepository for InMemoryBackend {
    async fn upsert_profile_record(&self, record: &ProfileRecord) -> Result<(), BackendError> {
        self.enter(BackendOperation::UpsertProfile)?;
        self.profiles
            .write()
            .entry(record.user_id.clone())
            .and_modify(|existing| existing.merge(record.clone()))
            .or_insert_with(|| record.clone());
        Ok(())
    }

    async fn fetch_profile_record(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileRecord>, BackendError> {
        self.enter(BackendOperation::FetchProfile)?;
        Ok(self.profile(user_id))
    }
}
