//! Active-sessions view model.

use chrono::NaiveDate;
use mc_01_lifecycle::{ongoing_count, AppState, LifecycleApi, LifecycleConfig, MutationOutcome};
use shared_types::{ActiveSession, SessionStatus};
use tracing::debug;

/// Palette slot for a session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Ongoing
    Green,
    /// Completed
    Blue,
    /// Cancelled
    Red,
}

impl From<SessionStatus> for StatusTone {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Ongoing => StatusTone::Green,
            SessionStatus::Completed => StatusTone::Blue,
            SessionStatus::Cancelled => StatusTone::Red,
        }
    }
}

/// Session card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow<'a> {
    /// The session.
    pub session: &'a ActiveSession,
    /// Status colour.
    pub tone: StatusTone,
    /// Cancel control offered.
    pub can_cancel: bool,
}

/// Everything the sessions screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionsView<'a> {
    /// `N/M active sessions`
    pub header: String,
    /// Cards in creation order.
    pub rows: Vec<SessionRow<'a>>,
}

impl<'a> SessionsView<'a> {
    /// Derive the view from the store state.
    pub fn build(state: &'a AppState, config: &LifecycleConfig) -> Self {
        let sessions = state.active_sessions();
        let header = format!(
            "{}/{} active sessions",
            ongoing_count(sessions),
            config.max_ongoing_sessions
        );
        let rows = sessions
            .iter()
            .map(|session| SessionRow {
                session,
                tone: session.status.into(),
                can_cancel: session.is_ongoing(),
            })
            .collect();
        Self { header, rows }
    }
}

/// Cancel the session if the screen offers cancelling it.
///
/// Returns `None` when no cancel control is shown for `id`.
pub fn cancel_if_offered<S: LifecycleApi + ?Sized>(
    store: &mut S,
    id: &str,
) -> Option<MutationOutcome> {
    let offered = store.state().session(id).is_some_and(ActiveSession::is_ongoing);
    if !offered {
        debug!(session_id = id, "No cancel control for session");
        return None;
    }
    Some(store.cancel_session(id))
}

/// Date as the session cards print it, e.g. `January 16, 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mc_01_lifecycle::{AppStore, FixedClock};
    use shared_types::RequestDecision;

    fn session(id: &str, status: SessionStatus) -> ActiveSession {
        let day = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        ActiveSession {
            id: id.into(),
            client_name: "Sarah Johnson".into(),
            start_date: day,
            end_date: day,
            payment_amount: 150,
            status,
        }
    }

    #[test]
    fn test_header_counts_ongoing_only() {
        let state = AppState::seeded().with_sessions(vec![
            session("a", SessionStatus::Ongoing),
            session("b", SessionStatus::Cancelled),
            session("c", SessionStatus::Completed),
        ]);
        let view = SessionsView::build(&state, &LifecycleConfig::default());
        assert_eq!(view.header, "1/3 active sessions");
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn test_cancel_offered_only_for_ongoing() {
        let state = AppState::seeded().with_sessions(vec![
            session("a", SessionStatus::Ongoing),
            session("b", SessionStatus::Cancelled),
            session("c", SessionStatus::Completed),
        ]);
        let view = SessionsView::build(&state, &LifecycleConfig::default());
        let offered: Vec<bool> = view.rows.iter().map(|r| r.can_cancel).collect();
        assert_eq!(offered, vec![true, false, false]);
        let tones: Vec<StatusTone> = view.rows.iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![StatusTone::Green, StatusTone::Red, StatusTone::Blue]);
    }

    #[test]
    fn test_cancel_if_offered() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 16, 8, 0, 0).unwrap());
        let mut store =
            AppStore::with_clock(AppState::seeded(), clock, LifecycleConfig::default());
        store.update_client_request_status("1", RequestDecision::Accept);
        let id = store.state().active_sessions()[0].id.clone();

        assert_eq!(
            cancel_if_offered(&mut store, &id),
            Some(MutationOutcome::Applied)
        );
        assert_eq!(cancel_if_offered(&mut store, &id), None);
        assert_eq!(cancel_if_offered(&mut store, "missing"), None);
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert_eq!(long_date(date), "January 16, 2025");
    }
}
