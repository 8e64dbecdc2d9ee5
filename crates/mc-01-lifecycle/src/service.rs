//! Lifecycle Store Service
//!
//! Owns the current [`AppState`], applies transitions through it and
//! publishes a revision number after every change so views know to redraw.

use shared_types::{ProfileUpdate, RequestDecision, User};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::LifecycleConfig;
use crate::domain::{AppState, MutationOutcome, Transition};
use crate::ports::inbound::LifecycleApi;
use crate::ports::outbound::{Clock, SystemClock};

/// Application state store.
///
/// Single owner of user, request and session data. Not `Sync`-shared:
/// the UI event loop holds it by value.
pub struct AppStore<C: Clock = SystemClock> {
    state: AppState,
    clock: C,
    config: LifecycleConfig,
    revision: watch::Sender<u64>,
}

impl AppStore<SystemClock> {
    /// Store over the seed job board with the wall clock.
    pub fn new() -> Self {
        Self::with_clock(AppState::seeded(), SystemClock, LifecycleConfig::default())
    }
}

impl Default for AppStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AppStore<C> {
    /// Store over an explicit state, clock and config.
    pub fn with_clock(state: AppState, clock: C, config: LifecycleConfig) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state,
            clock,
            config,
            revision,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Subscribe to change notifications. The value is a revision counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    fn commit(&mut self, transition: Transition, operation: &'static str) -> MutationOutcome {
        self.state = transition.state;
        match transition.outcome {
            MutationOutcome::Applied => self.notify(),
            MutationOutcome::Unchanged => debug!(operation, "Mutation was a no-op"),
            MutationOutcome::NotFound => debug!(operation, "Mutation target not found"),
        }
        transition.outcome
    }
}

impl<C: Clock> LifecycleApi for AppStore<C> {
    fn state(&self) -> &AppState {
        &self.state
    }

    fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => info!(user_id = %u.id, status = %u.status, "User set"),
            None => info!("User cleared"),
        }
        self.state = std::mem::take(&mut self.state).with_user(user);
        self.notify();
    }

    fn update_profile(&mut self, update: ProfileUpdate) -> MutationOutcome {
        let transition = std::mem::take(&mut self.state).with_profile_update(update);
        if transition.outcome.is_applied() {
            if let Some(user) = transition.state.user() {
                info!(
                    user_id = %user.id,
                    profile_complete = user.profile_complete,
                    status = %user.status,
                    "Profile updated"
                );
            }
        }
        self.commit(transition, "update_profile")
    }

    fn update_client_request_status(
        &mut self,
        id: &str,
        decision: RequestDecision,
    ) -> MutationOutcome {
        let now = self.clock.now();
        let sessions_before = self.state.active_sessions().len();
        let transition = std::mem::take(&mut self.state).with_request_decision(
            id,
            decision,
            now,
            self.config.session_length_days,
        );

        if transition.outcome.is_applied() {
            info!(request_id = id, ?decision, "Client request decided");
            if let Some(session) = transition.state.active_sessions().get(sessions_before) {
                info!(
                    session_id = %session.id,
                    client = %session.client_name,
                    end_date = %session.end_date,
                    payment = session.payment_amount,
                    "Active session started"
                );
            }
        }
        self.commit(transition, "update_client_request_status")
    }

    fn cancel_session(&mut self, id: &str) -> MutationOutcome {
        let transition = std::mem::take(&mut self.state).with_session_cancelled(id);
        if transition.outcome.is_applied() {
            info!(session_id = id, "Session cancelled");
        }
        self.commit(transition, "cancel_session")
    }
}
