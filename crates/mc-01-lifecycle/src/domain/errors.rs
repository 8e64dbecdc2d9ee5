//! # Domain Errors
//!
//! Reasons a call-site policy refuses to dispatch a request decision. The
//! messages are shown verbatim in the blocking alert.

use thiserror::Error;

/// A request decision was refused before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateDenial {
    /// Accept attempted by a worker who is not approved.
    #[error("Please complete your profile to get verified before accepting requests.")]
    NotVerifiedToAccept,

    /// Reject attempted by a worker who is not approved.
    #[error("Please complete your profile to get verified before managing requests.")]
    NotVerifiedToManage,

    /// The worker already has the maximum number of ongoing sessions.
    #[error(
        "You have reached the maximum limit of {max} active sessions. \
         Please complete or cancel existing sessions before accepting new ones."
    )]
    SessionLimitReached {
        /// Sessions currently ongoing
        ongoing: usize,
        /// Configured maximum
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_limit_message() {
        let err = GateDenial::SessionLimitReached { ongoing: 3, max: 3 };
        assert!(err.to_string().contains("maximum limit of 3 active sessions"));
    }

    #[test]
    fn test_not_verified_messages_differ() {
        assert!(GateDenial::NotVerifiedToAccept
            .to_string()
            .ends_with("accepting requests."));
        assert!(GateDenial::NotVerifiedToManage
            .to_string()
            .ends_with("managing requests."));
    }
}
