//! # Inbound Ports
//!
//! API trait defining what the Lifecycle subsystem can do for its views.

use shared_types::{ProfileUpdate, RequestDecision, User};

use crate::domain::{AppState, MutationOutcome};

/// Lifecycle API - inbound port.
///
/// Synchronous: every call runs to completion on the UI event thread.
/// None of the mutations check approval or the ongoing cap; see
/// [`crate::domain::policy`].
pub trait LifecycleApi {
    /// Read-only view of the current state.
    fn state(&self) -> &AppState;

    /// Replace the current user wholesale.
    fn set_user(&mut self, user: Option<User>);

    /// Merge profile fields into the current user.
    fn update_profile(&mut self, update: ProfileUpdate) -> MutationOutcome;

    /// Accept or reject a pending request.
    fn update_client_request_status(
        &mut self,
        id: &str,
        decision: RequestDecision,
    ) -> MutationOutcome;

    /// Cancel a session.
    fn cancel_session(&mut self, id: &str) -> MutationOutcome;
}
