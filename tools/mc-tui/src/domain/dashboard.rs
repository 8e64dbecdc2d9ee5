//! Dashboard view model and the gate-then-dispatch path for request
//! decisions.
//!
//! Accept / reject go through [`dispatch_decision`]: the call-site policy
//! runs first and the store is only reached when it passes.

use mc_01_lifecycle::{
    check_accept, check_reject, ongoing_count, AppState, GateDenial, LifecycleApi,
    LifecycleConfig, MutationOutcome,
};
use shared_types::{ClientRequest, RequestDecision, VerificationStatus};
use tracing::{debug, info};

/// Warning strip above the request list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Bold lead-in.
    pub title: &'static str,
    /// Body text.
    pub message: String,
}

/// One pending request with its control states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow<'a> {
    /// The request.
    pub request: &'a ClientRequest,
    /// Accept control enabled.
    pub can_accept: bool,
    /// Reject control enabled.
    pub can_reject: bool,
}

/// Everything the dashboard screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a> {
    /// Banners, in display order.
    pub banners: Vec<Banner>,
    /// Pending requests only.
    pub rows: Vec<RequestRow<'a>>,
}

impl<'a> DashboardView<'a> {
    /// Derive the view from the store state.
    pub fn build(state: &'a AppState, config: &LifecycleConfig) -> Self {
        let user = state.user();
        let sessions = state.active_sessions();
        let can_accept = check_accept(user, sessions, config).is_ok();
        let can_reject = check_reject(user).is_ok();

        let mut banners = Vec::new();
        match user.map(|u| u.status) {
            Some(VerificationStatus::Pending) => banners.push(Banner {
                title: "Verification Pending",
                message: "Please complete your profile to get verified and start accepting \
                          client requests."
                    .to_string(),
            }),
            Some(VerificationStatus::Approved)
                if ongoing_count(sessions) >= config.max_ongoing_sessions =>
            {
                banners.push(Banner {
                    title: "Session Limit Reached",
                    message: format!(
                        "You have {} active sessions (maximum limit). Complete or cancel \
                         existing sessions to accept new requests.",
                        config.max_ongoing_sessions
                    ),
                })
            }
            _ => {}
        }

        let rows = state
            .pending_requests()
            .map(|request| RequestRow {
                request,
                can_accept,
                can_reject,
            })
            .collect();

        Self { banners, rows }
    }
}

/// Result of pressing accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The gate passed and the store ran the mutation.
    Sent(MutationOutcome),
    /// The gate refused; the store was not called.
    Blocked(GateDenial),
}

/// Check the call-site policy, then forward to the store.
pub fn dispatch_decision<S: LifecycleApi + ?Sized>(
    store: &mut S,
    config: &LifecycleConfig,
    request_id: &str,
    decision: RequestDecision,
) -> Dispatch {
    let state = store.state();
    let gate = match decision {
        RequestDecision::Accept => check_accept(state.user(), state.active_sessions(), config),
        RequestDecision::Reject => check_reject(state.user()),
    };

    if let Err(denial) = gate {
        debug!(request_id, ?decision, %denial, "Decision blocked at call site");
        return Dispatch::Blocked(denial);
    }

    let outcome = store.update_client_request_status(request_id, decision);
    info!(request_id, ?decision, ?outcome, "Decision dispatched");
    Dispatch::Sent(outcome)
}

/// Date as the request list prints it, e.g. `1/9/2025`.
pub fn short_date(date: chrono::NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::{
        ActiveSession, ProfileUpdate, RequestStatus, SessionStatus, User,
    };

    /// Store double that records every mutation call.
    struct RecordingStore {
        state: AppState,
        decisions: Vec<(String, RequestDecision)>,
    }

    impl RecordingStore {
        fn new(state: AppState) -> Self {
            Self {
                state,
                decisions: Vec::new(),
            }
        }
    }

    impl LifecycleApi for RecordingStore {
        fn state(&self) -> &AppState {
            &self.state
        }

        fn set_user(&mut self, user: Option<User>) {
            self.state = std::mem::take(&mut self.state).with_user(user);
        }

        fn update_profile(&mut self, _update: ProfileUpdate) -> MutationOutcome {
            MutationOutcome::Unchanged
        }

        fn update_client_request_status(
            &mut self,
            id: &str,
            decision: RequestDecision,
        ) -> MutationOutcome {
            self.decisions.push((id.to_string(), decision));
            MutationOutcome::Applied
        }

        fn cancel_session(&mut self, _id: &str) -> MutationOutcome {
            MutationOutcome::Unchanged
        }
    }

    fn user(status: VerificationStatus) -> User {
        User {
            status,
            ..User::new("u-1", "Ana", "ana@example.com")
        }
    }

    fn ongoing(n: usize) -> Vec<ActiveSession> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        (0..n)
            .map(|i| ActiveSession {
                id: format!("s-{i}"),
                client_name: "Client".into(),
                start_date: day,
                end_date: day,
                payment_amount: 100,
                status: SessionStatus::Ongoing,
            })
            .collect()
    }

    #[test]
    fn test_pending_user_accept_never_reaches_store() {
        let state = AppState::seeded().with_user(Some(user(VerificationStatus::Pending)));
        let mut store = RecordingStore::new(state);
        let config = LifecycleConfig::default();

        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Accept);
        assert_eq!(result, Dispatch::Blocked(GateDenial::NotVerifiedToAccept));

        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Reject);
        assert_eq!(result, Dispatch::Blocked(GateDenial::NotVerifiedToManage));

        assert!(store.decisions.is_empty());
    }

    #[test]
    fn test_fourth_accept_blocked_at_cap() {
        let state = AppState::seeded()
            .with_sessions(ongoing(3))
            .with_user(Some(user(VerificationStatus::Approved)));
        let mut store = RecordingStore::new(state);
        let config = LifecycleConfig::default();

        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Accept);
        assert!(matches!(
            result,
            Dispatch::Blocked(GateDenial::SessionLimitReached { ongoing: 3, max: 3 })
        ));
        assert!(store.decisions.is_empty());

        // Reject is still allowed at the cap.
        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Reject);
        assert_eq!(result, Dispatch::Sent(MutationOutcome::Applied));
        assert_eq!(store.decisions, vec![("1".to_string(), RequestDecision::Reject)]);
    }

    #[test]
    fn test_no_user_is_blocked() {
        let mut store = RecordingStore::new(AppState::seeded());
        let result = dispatch_decision(
            &mut store,
            &LifecycleConfig::default(),
            "2",
            RequestDecision::Accept,
        );
        assert_eq!(result, Dispatch::Blocked(GateDenial::NotVerifiedToAccept));
        assert!(store.decisions.is_empty());
    }

    #[test]
    fn test_approved_accept_dispatches_to_real_store() {
        use mc_01_lifecycle::{AppStore, FixedClock};
        use chrono::{TimeZone, Utc};

        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap());
        let mut store = AppStore::with_clock(
            AppState::seeded(),
            clock,
            LifecycleConfig::default(),
        );
        store.set_user(Some(user(VerificationStatus::Approved)));
        let config = store.config().clone();

        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Accept);
        assert_eq!(result, Dispatch::Sent(MutationOutcome::Applied));
        assert_eq!(
            store.state().client_request("1").unwrap().status,
            RequestStatus::Accepted
        );
        assert_eq!(store.state().active_sessions()[0].payment_amount, 150);
    }

    #[test]
    fn test_view_lists_only_pending() {
        let state = AppState::seeded().with_user(Some(user(VerificationStatus::Approved)));
        let transition = state.with_request_decision(
            "2",
            RequestDecision::Reject,
            chrono::Utc::now(),
            7,
        );
        let view = DashboardView::build(&transition.state, &LifecycleConfig::default());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].request.id, "1");
        assert!(view.rows[0].can_accept);
        assert!(view.banners.is_empty());
    }

    #[test]
    fn test_pending_banner_and_disabled_controls() {
        let state = AppState::seeded().with_user(Some(user(VerificationStatus::Pending)));
        let view = DashboardView::build(&state, &LifecycleConfig::default());
        assert_eq!(view.banners.len(), 1);
        assert_eq!(view.banners[0].title, "Verification Pending");
        assert!(view.rows.iter().all(|r| !r.can_accept && !r.can_reject));
    }

    #[test]
    fn test_limit_banner_only_for_approved() {
        let state = AppState::seeded()
            .with_sessions(ongoing(3))
            .with_user(Some(user(VerificationStatus::Approved)));
        let view = DashboardView::build(&state, &LifecycleConfig::default());
        assert_eq!(view.banners[0].title, "Session Limit Reached");
        assert!(view.rows.iter().all(|r| !r.can_accept && r.can_reject));

        let anonymous = AppState::seeded().with_sessions(ongoing(3));
        let view = DashboardView::build(&anonymous, &LifecycleConfig::default());
        assert!(view.banners.is_empty());
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(short_date(date), "1/9/2025");
    }
}
