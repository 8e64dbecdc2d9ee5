//! # Lifecycle Flows
//!
//! Request decisions driven the way the dashboard drives them: call-site
//! gate first, store second.
//!
//! 1. **Gate**: unverified workers and full session slots never reach the store
//! 2. **Accept**: request becomes accepted, one ongoing session appears
//! 3. **Cancel**: frees a slot, so the next accept goes through

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use mc_01_lifecycle::{
        AppState, AppStore, FixedClock, GateDenial, LifecycleApi, LifecycleConfig,
        MutationOutcome,
    };
    use mc_tui::domain::{dispatch_decision, Dispatch, SessionsView};
    use mc_tui::{App, Route};
    use proptest::prelude::*;
    use shared_types::{
        ClientRequest, RequestDecision, RequestStatus, SessionStatus, User, VerificationStatus,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn approved() -> User {
        User {
            status: VerificationStatus::Approved,
            profile_complete: true,
            ..User::new("u-1", "Ana", "ana@example.com")
        }
    }

    fn request(id: &str, payment: u64) -> ClientRequest {
        ClientRequest {
            id: id.into(),
            client_name: format!("Client {id}"),
            area: "Midtown".into(),
            rooms: 2,
            tasks: vec!["Cleaning".into()],
            requirements: "None".into(),
            payment_offered: payment,
            duration: "2 hours".into(),
            date_posted: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            status: RequestStatus::Pending,
        }
    }

    fn store_with(requests: Vec<ClientRequest>) -> AppStore<FixedClock> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 16, 10, 0, 0).unwrap());
        AppStore::with_clock(
            AppState::new(requests),
            clock,
            LifecycleConfig::default(),
        )
    }

    // =========================================================================
    // GATES
    // =========================================================================

    #[test]
    fn test_seed_accept_scenario() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 16, 10, 0, 0).unwrap());
        let mut store =
            AppStore::with_clock(AppState::seeded(), clock, LifecycleConfig::default());
        store.set_user(Some(approved()));
        let config = store.config().clone();

        let result = dispatch_decision(&mut store, &config, "1", RequestDecision::Accept);
        assert_eq!(result, Dispatch::Sent(MutationOutcome::Applied));

        let state = store.state();
        assert_eq!(state.client_request("1").unwrap().status, RequestStatus::Accepted);
        assert_eq!(state.active_sessions().len(), 1);
        let session = &state.active_sessions()[0];
        assert_eq!(session.payment_amount, 150);
        assert_eq!(session.status, SessionStatus::Ongoing);
        assert_eq!(session.start_date, NaiveDate::from_ymd_opt(2025, 1, 16).unwrap());
        assert_eq!(session.end_date, NaiveDate::from_ymd_opt(2025, 1, 23).unwrap());
    }

    #[test]
    fn test_cap_then_cancel_frees_slot() {
        let mut store = store_with((1..=5).map(|i| request(&i.to_string(), 100)).collect());
        store.set_user(Some(approved()));
        let config = store.config().clone();

        for id in ["1", "2", "3"] {
            assert_eq!(
                dispatch_decision(&mut store, &config, id, RequestDecision::Accept),
                Dispatch::Sent(MutationOutcome::Applied)
            );
        }

        let revision = store.revision();
        let blocked = dispatch_decision(&mut store, &config, "4", RequestDecision::Accept);
        assert!(matches!(
            blocked,
            Dispatch::Blocked(GateDenial::SessionLimitReached { .. })
        ));
        assert_eq!(store.revision(), revision);
        assert_eq!(
            store.state().client_request("4").unwrap().status,
            RequestStatus::Pending
        );

        let first = store.state().active_sessions()[0].id.clone();
        assert_eq!(store.cancel_session(&first), MutationOutcome::Applied);
        assert_eq!(
            SessionsView::build(store.state(), &config).header,
            "2/3 active sessions"
        );

        assert_eq!(
            dispatch_decision(&mut store, &config, "4", RequestDecision::Accept),
            Dispatch::Sent(MutationOutcome::Applied)
        );
    }

    #[test]
    fn test_pending_worker_blocked_through_key_handling() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 16, 10, 0, 0).unwrap());
        let store = AppStore::with_clock(AppState::seeded(), clock, LifecycleConfig::default());
        let mut app = App::new(store, Route::Dashboard);
        app.store
            .set_user(Some(User::new("u-1", "Ana", "ana@example.com")));
        let revision = app.store.revision();

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        assert!(app.alert.is_some());
        assert_eq!(app.store.revision(), revision);
        assert!(app.store.state().active_sessions().is_empty());
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    proptest! {
        /// Whatever sequence of gated accepts a worker makes, the ongoing
        /// count never exceeds the cap.
        #[test]
        fn prop_gated_accepts_respect_cap(order in proptest::collection::vec(0usize..8, 0..20)) {
            let mut store = store_with((0..8).map(|i| request(&i.to_string(), 50)).collect());
            store.set_user(Some(approved()));
            let config = store.config().clone();

            for i in order {
                dispatch_decision(&mut store, &config, &i.to_string(), RequestDecision::Accept);
                let ongoing = store
                    .state()
                    .active_sessions()
                    .iter()
                    .filter(|s| s.is_ongoing())
                    .count();
                prop_assert!(ongoing <= config.max_ongoing_sessions);
            }
        }
    }
}
