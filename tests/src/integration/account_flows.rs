//! # Account Flows
//!
//! Backend account service feeding the lifecycle store:
//!
//! 1. **Sign-up**: document upload + initial row, worker stays pending
//! 2. **Profile completion**: store update and row upsert agree on approval
//! 3. **Returning worker**: a saved complete row signs in approved

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use mc_01_lifecycle::{AppState, AppStore, FixedClock, LifecycleApi, LifecycleConfig};
    use mc_02_backend::{
        AccountService, BackendOperation, Credentials, IdProofFile, InMemoryBackend,
    };
    use mc_tui::domain::ProfileForm;
    use shared_types::VerificationStatus;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn backend() -> (Arc<InMemoryBackend>, AccountService) {
        let backend = Arc::new(InMemoryBackend::new());
        let service = AccountService::from_backend(backend.clone(), "idproofs");
        (backend, service)
    }

    fn store() -> AppStore<FixedClock> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 16, 10, 0, 0).unwrap());
        AppStore::with_clock(AppState::seeded(), clock, LifecycleConfig::default())
    }

    fn credentials() -> Credentials {
        Credentials {
            name: "Maria Santos".into(),
            email: "maria@example.com".into(),
            password: "hunter22".into(),
        }
    }

    fn id_proof() -> IdProofFile {
        IdProofFile {
            file_name: "national-id.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    // =========================================================================
    // FLOWS
    // =========================================================================

    #[tokio::test]
    async fn test_new_worker_signs_in_pending() {
        let (backend, service) = backend();
        let account = service
            .sign_up(&credentials(), Some(id_proof()))
            .await
            .unwrap();
        assert!(backend
            .object("idproofs", &format!("idproofs/{}.jpg", account.id))
            .is_some());

        let mut store = store();
        let user = service.sign_in(&credentials()).await.unwrap();
        store.set_user(Some(user));

        let user = store.state().user().unwrap();
        assert_eq!(user.id, account.id);
        assert_eq!(user.status, VerificationStatus::Pending);
        assert!(!user.profile_complete);
    }

    #[tokio::test]
    async fn test_profile_completion_round_trip() {
        let (_, service) = backend();
        service
            .sign_up(&credentials(), Some(id_proof()))
            .await
            .unwrap();

        let mut store = store();
        store.set_user(Some(service.sign_in(&credentials()).await.unwrap()));

        let mut form = ProfileForm::from_user(store.state().user());
        form.contact_number = "+1 555 0100".into();
        form.address = "221 Pine Ave".into();
        form.years_of_experience = "8".into();
        form.skillset = "Cleaning, Laundry".into();
        assert!(form.is_valid());

        store.update_profile(form.to_update());
        assert!(store.state().user().unwrap().is_approved());

        let user_id = store.state().user().unwrap().id.clone();
        let saved = service.save_profile(&user_id, form.to_draft()).await;
        assert!(saved.success);

        // A fresh session derives the same verdict from the stored row.
        let returning = service.sign_in(&credentials()).await.unwrap();
        assert_eq!(returning.status, VerificationStatus::Approved);
        assert_eq!(returning.skillset, "Cleaning, Laundry");
        assert_eq!(returning.years_of_experience, 8);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_store_untouched() {
        let (backend, service) = backend();
        service
            .sign_up(&credentials(), Some(id_proof()))
            .await
            .unwrap();
        backend.fail_next(BackendOperation::FetchProfile, "connection reset");

        let store = store();
        let revision = store.revision();
        let err = service.sign_in(&credentials()).await.unwrap_err();

        assert_eq!(err.to_string(), "Error fetching maid: connection reset");
        assert!(store.state().user().is_none());
        assert_eq!(store.revision(), revision);
    }
}
