//! REST client for the hosted backend.
//!
//! Talks to the three service prefixes of the project URL:
//! `/auth/v1`, `/storage/v1` and `/rest/v1`. Every request carries the
//! public key in `apikey`; `Authorization` carries the session token once
//! a sign-in succeeded, the public key before that.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::BackendConfig;
use crate::domain::{AuthUser, BackendError, ProfileRecord};
use crate::ports::{AuthProvider, FileStorage, ProfileRepository};

/// Error body shapes the three services return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Auth responses either wrap the user in a session or are the user.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl AuthResponse {
    fn into_user(self) -> Option<AuthUser> {
        match (self.user, self.id) {
            (Some(user), _) => Some(user),
            (None, Some(id)) => Some(AuthUser {
                id,
                email: self.email.unwrap_or_default(),
            }),
            (None, None) => None,
        }
    }
}

/// HTTP adapter for all three backend ports.
pub struct ManagedBackendClient {
    client: Client,
    config: BackendConfig,
    access_token: RwLock<Option<String>>,
}

impl ManagedBackendClient {
    /// Build a client. Validates the configuration first.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        config
            .validate()
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            config,
            access_token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .access_token
            .read()
            .clone()
            .unwrap_or_else(|| self.config.anon_key.clone());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = self.authorized(request).send().await.map_err(|e| {
            if e.is_connect() {
                BackendError::Connection(format!("Cannot connect to {}", self.config.base_url))
            } else {
                BackendError::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body
            .into_message()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
        debug!(status = status.as_u16(), %message, "Backend rejected request");
        Err(BackendError::rejected(status.as_u16(), message))
    }

    async fn authenticate(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, BackendError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self.send(self.client.post(self.url(path)).json(&body)).await?;
        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        if let Some(token) = auth.access_token.clone() {
            *self.access_token.write() = Some(token);
        }
        auth.into_user()
            .ok_or_else(|| BackendError::Parse("Missing user in auth response".to_string()))
    }
}

#[async_trait]
impl AuthProvider for ManagedBackendClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        let user = self.authenticate("/auth/v1/signup", email, password).await?;
        info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, BackendError> {
        let user = self
            .authenticate("/auth/v1/token?grant_type=password", email, password)
            .await?;
        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }
}

#[async_trait]
impl FileStorage for ManagedBackendClient {
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), BackendError> {
        let size = bytes.len();
        let request = self
            .client
            .post(self.url(&format!("/storage/v1/object/{bucket}/{path}")))
            .header("x-upsert", upsert.to_string())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);
        self.send(request).await?;
        info!(bucket, path, size, "File uploaded");
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.url(&format!("/storage/v1/object/public/{bucket}/{path}"))
    }
}

#[async_trait]
impl ProfileRepository for ManagedBackendClient {
    async fn upsert_profile_record(&self, record: &ProfileRecord) -> Result<(), BackendError> {
        let request = self
            .client
            .post(self.url(&format!("/rest/v1/{}", self.config.profile_table)))
            .query(&[("on_conflict", "user_id")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[record]);
        self.send(request).await?;
        debug!(user_id = %record.user_id, "Profile record upserted");
        Ok(())
    }

    async fn fetch_profile_record(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileRecord>, BackendError> {
        let filter = format!("eq.{user_id}");
        let request = self
            .client
            .get(self.url(&format!("/rest/v1/{}", self.config.profile_table)))
            .query(&[("select", "*"), ("user_id", filter.as_str())]);
        let rows: Vec<ProfileRecord> = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        match rows.len() {
            0 | 1 => Ok(rows.into_iter().next()),
            n => Err(BackendError::rejected(
                406,
                format!("Expected at most one profile row for {user_id}, found {n}"),
            )),
        }
    }
}
