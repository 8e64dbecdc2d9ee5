//! Sidebar navigation entries and the signed-in user's badge.

use shared_types::{User, VerificationStatus};

use super::Route;

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Hotkey shown next to the label.
    pub hotkey: char,
    /// Label.
    pub label: &'static str,
    /// Destination; `None` for entries not available yet.
    pub route: Option<Route>,
}

impl NavItem {
    /// Whether the entry can be selected.
    pub fn is_enabled(&self) -> bool {
        self.route.is_some()
    }
}

/// Sidebar entries, top to bottom.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        hotkey: '1',
        label: "Home",
        route: Some(Route::Dashboard),
    },
    NavItem {
        hotkey: '2',
        label: "Active Sessions",
        route: Some(Route::ActiveSessions),
    },
    NavItem {
        hotkey: '3',
        label: "Paid Leave Token",
        route: None,
    },
    NavItem {
        hotkey: '4',
        label: "Profile",
        route: Some(Route::Profile),
    },
];

/// Destination of a sidebar hotkey, if it names an enabled entry.
pub fn route_for_hotkey(key: char) -> Option<Route> {
    NAV_ITEMS
        .iter()
        .find(|item| item.hotkey == key)
        .and_then(|item| item.route)
}

const NAME_LIMIT: usize = 10;

/// Short name shown at the top of the sidebar.
///
/// First word of the name, else the email's local part, cut to ten
/// characters.
pub fn display_name(user: Option<&User>) -> String {
    let Some(user) = user else {
        return "Complete Profile".to_string();
    };
    let base = match user.name.split_whitespace().next() {
        Some(first) => first,
        None => user.email.split('@').next().unwrap_or_default(),
    };
    if base.chars().count() > NAME_LIMIT {
        let cut: String = base.chars().take(NAME_LIMIT).collect();
        format!("{cut}...")
    } else {
        base.to_string()
    }
}

/// Caption under the display name.
pub fn status_caption(user: Option<&User>) -> &'static str {
    match user.map(|u| u.status) {
        Some(VerificationStatus::Pending) => "Pending Verification",
        _ => "Verified Member",
    }
}
