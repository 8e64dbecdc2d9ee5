//! Domain models for the front-end.

pub mod app;
pub mod auth_form;
pub mod dashboard;
pub mod profile_form;
pub mod redraw;
pub mod route;
pub mod sessions;
pub mod sidebar;

pub use app::{App, Command};
pub use auth_form::{AuthField, AuthForm, AuthMode, AuthRequest};
pub use dashboard::{dispatch_decision, Banner, DashboardView, Dispatch, RequestRow};
pub use profile_form::{ProfileField, ProfileForm};
pub use redraw::RedrawGate;
pub use route::Route;
pub use sessions::{SessionRow, SessionsView, StatusTone};
pub use sidebar::{NavItem, NAV_ITEMS};
