//! # Call-Site Policy
//!
//! Rules a view must check before dispatching a request decision.
//!
//! The store deliberately does not run these. Any caller that skips them can
//! accept requests for an unverified worker or exceed the ongoing cap.

use shared_types::{ActiveSession, User};

use super::errors::GateDenial;
use crate::config::LifecycleConfig;

/// Number of sessions currently `ongoing`.
pub fn ongoing_count(sessions: &[ActiveSession]) -> usize {
    sessions.iter().filter(|s| s.is_ongoing()).count()
}

/// Gate for accepting: approved worker and room under the ongoing cap.
pub fn check_accept(
    user: Option<&User>,
    sessions: &[ActiveSession],
    config: &LifecycleConfig,
) -> Result<(), GateDenial> {
    if !user.is_some_and(User::is_approved) {
        return Err(GateDenial::NotVerifiedToAccept);
    }

    let ongoing = ongoing_count(sessions);
    if ongoing >= config.max_ongoing_sessions {
        return Err(GateDenial::SessionLimitReached {
            ongoing,
            max: config.max_ongoing_sessions,
        });
    }

    Ok(())
}

/// Gate for rejecting: approved worker only.
pub fn check_reject(user: Option<&User>) -> Result<(), GateDenial> {
    if user.is_some_and(User::is_approved) {
        Ok(())
    } else {
        Err(GateDenial::NotVerifiedToManage)
    }
}
