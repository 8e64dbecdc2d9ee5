//! # Domain Errors
//!
//! Two layers: [`BackendError`] is what a port call can fail with;
//! [`AccountError`] is what a user-facing flow reports, worded for the
//! blocking alert.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend unreachable.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Backend answered with an error. `message` is its own wording.
    #[error("{message}")]
    Rejected {
        /// HTTP-style status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl BackendError {
    /// Rejection with the given status and message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Failure of a sign-up, sign-in or profile flow.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Sign-up submitted without an identity-proof document.
    #[error("Please upload your ID proof.")]
    MissingIdProof,

    /// Authentication refused the sign-up.
    #[error("{0}")]
    SignUp(String),

    /// Identity-proof upload failed.
    #[error("Failed to upload ID proof: {0}")]
    Upload(String),

    /// Profile row could not be written.
    #[error("Error saving maid: {0}")]
    SaveProfile(String),

    /// Authentication refused the sign-in.
    #[error("{0}")]
    SignIn(String),

    /// Profile row could not be read.
    #[error("Error fetching maid: {0}")]
    FetchProfile(String),
}

/// Message for an auth failure, falling back when the backend gave none.
pub(crate) fn auth_message(err: &BackendError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_backend_message() {
        let err = BackendError::rejected(400, "Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_account_error_wording() {
        assert_eq!(
            AccountError::Upload("bucket not found".into()).to_string(),
            "Failed to upload ID proof: bucket not found"
        );
        assert_eq!(
            AccountError::SaveProfile("duplicate key".into()).to_string(),
            "Error saving maid: duplicate key"
        );
        assert_eq!(
            AccountError::MissingIdProof.to_string(),
            "Please upload your ID proof."
        );
    }

    #[test]
    fn test_auth_message_fallback() {
        let empty = BackendError::rejected(400, "");
        assert_eq!(auth_message(&empty, "Login failed"), "Login failed");

        let named = BackendError::rejected(400, "Email not confirmed");
        assert_eq!(auth_message(&named, "Login failed"), "Email not confirmed");
    }
}
