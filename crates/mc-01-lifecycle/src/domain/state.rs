//! # Application State
//!
//! The immutable-by-value state object. Every mutation consumes the current
//! state and returns the next one together with an explicit outcome, so the
//! lifecycle rules can be exercised without any UI.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{
    ActiveSession, ClientRequest, ProfileUpdate, RequestDecision, RequestStatus, SessionId,
    SessionStatus, User,
};

use super::seed::seed_client_requests;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    /// State changed.
    Applied,
    /// Target exists but the rule made this a no-op.
    Unchanged,
    /// No user / request / session matched.
    NotFound,
}

impl MutationOutcome {
    /// `true` if the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Next state plus the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the mutation.
    pub state: AppState,
    /// What happened.
    pub outcome: MutationOutcome,
}

impl Transition {
    fn applied(state: AppState) -> Self {
        Self {
            state,
            outcome: MutationOutcome::Applied,
        }
    }

    fn unchanged(state: AppState) -> Self {
        Self {
            state,
            outcome: MutationOutcome::Unchanged,
        }
    }

    fn not_found(state: AppState) -> Self {
        Self {
            state,
            outcome: MutationOutcome::NotFound,
        }
    }
}

/// Everything the application knows in one run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    user: Option<User>,
    client_requests: Vec<ClientRequest>,
    active_sessions: Vec<ActiveSession>,
}

impl AppState {
    /// State with the given job board and no user or sessions.
    pub fn new(client_requests: Vec<ClientRequest>) -> Self {
        Self {
            user: None,
            client_requests,
            active_sessions: Vec::new(),
        }
    }

    /// State with the seed job board.
    pub fn seeded() -> Self {
        Self::new(seed_client_requests())
    }

    /// Replace the session list wholesale (restores, fixtures).
    pub fn with_sessions(mut self, active_sessions: Vec<ActiveSession>) -> Self {
        self.active_sessions = active_sessions;
        self
    }

    /// Signed-in worker, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// All requests, any status.
    pub fn client_requests(&self) -> &[ClientRequest] {
        &self.client_requests
    }

    /// Requests still awaiting a decision.
    pub fn pending_requests(&self) -> impl Iterator<Item = &ClientRequest> {
        self.client_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
    }

    /// Look up a request.
    pub fn client_request(&self, id: &str) -> Option<&ClientRequest> {
        self.client_requests.iter().find(|r| r.id == id)
    }

    /// All sessions, any status.
    pub fn active_sessions(&self) -> &[ActiveSession] {
        &self.active_sessions
    }

    /// Look up a session.
    pub fn session(&self, id: &str) -> Option<&ActiveSession> {
        self.active_sessions.iter().find(|s| s.id == id)
    }

    /// Replace the current user. No validation.
    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    /// Merge a profile edit into the current user.
    ///
    /// `NotFound` when nobody is signed in.
    pub fn with_profile_update(mut self, update: ProfileUpdate) -> Transition {
        let Some(user) = self.user.as_mut() else {
            return Transition::not_found(self);
        };

        let before = user.clone();
        update.apply_to(user);
        if *user == before {
            Transition::unchanged(self)
        } else {
            Transition::applied(self)
        }
    }

    /// Record a decision on a pending request.
    ///
    /// Accepting also appends an `ongoing` session starting on `now`'s date
    /// and ending `session_length_days` later. Decisions on requests that are
    /// no longer pending are `Unchanged` and never create a second session.
    pub fn with_request_decision(
        mut self,
        id: &str,
        decision: RequestDecision,
        now: DateTime<Utc>,
        session_length_days: u64,
    ) -> Transition {
        let Some(index) = self.client_requests.iter().position(|r| r.id == id) else {
            return Transition::not_found(self);
        };
        let request = &mut self.client_requests[index];

        if request.status.is_terminal() {
            return Transition::unchanged(self);
        }

        request.status = decision.target_status();

        if decision == RequestDecision::Accept {
            let start_date = now.date_naive();
            let session = ActiveSession {
                id: String::new(),
                client_name: request.client_name.clone(),
                start_date,
                end_date: session_end(start_date, session_length_days),
                payment_amount: request.payment_offered,
                status: SessionStatus::Ongoing,
            };
            let id = self.next_session_id(now);
            self.active_sessions.push(ActiveSession { id, ..session });
        }

        Transition::applied(self)
    }

    /// Mark a session cancelled regardless of its prior status.
    pub fn with_session_cancelled(mut self, id: &str) -> Transition {
        let Some(index) = self.active_sessions.iter().position(|s| s.id == id) else {
            return Transition::not_found(self);
        };
        let session = &mut self.active_sessions[index];

        if session.status == SessionStatus::Cancelled {
            return Transition::unchanged(self);
        }

        session.status = SessionStatus::Cancelled;
        Transition::applied(self)
    }

    /// Millisecond timestamp, bumped until it does not collide.
    fn next_session_id(&self, now: DateTime<Utc>) -> SessionId {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if self.session(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }
}

fn session_end(start: NaiveDate, length_days: u64) -> NaiveDate {
    start
        .checked_add_days(Days::new(length_days))
        .unwrap_or(NaiveDate::MAX)
}
