//! In-app routes.

use std::fmt;

/// Screen addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/`
    #[default]
    Landing,
    /// `/auth`
    Auth,
    /// `/dashboard`
    Dashboard,
    /// `/active-sessions`
    ActiveSessions,
    /// `/find-maids`
    FindMaids,
    /// `/profile`
    Profile,
}

impl Route {
    /// All routes.
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Auth,
        Route::Dashboard,
        Route::ActiveSessions,
        Route::FindMaids,
        Route::Profile,
    ];

    /// Resolve a path. Unknown paths resolve to the landing screen.
    pub fn parse(path: &str) -> Self {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or_default()
    }

    /// Canonical path.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::ActiveSessions => "/active-sessions",
            Route::FindMaids => "/find-maids",
            Route::Profile => "/profile",
        }
    }

    /// Whether the screen is framed by the sidebar.
    pub fn has_sidebar(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::ActiveSessions | Route::FindMaids | Route::Profile
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
