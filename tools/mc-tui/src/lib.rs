//! Maid Connect terminal front-end.
//!
//! Job board for domestic-help workers: browse and decide client requests,
//! track the resulting sessions, complete the profile that gets the worker
//! verified.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  KeyEvent   ┌──────────────┐  LifecycleApi  ┌──────────────┐
//! │  event loop  │───────────▶│     App      │──────────────▶│   AppStore   │
//! │  (main.rs)   │◀───────────│  (domain/)   │                │   (mc-01)    │
//! └──────┬───────┘  Command    └──────────────┘                └──────────────┘
//!        │ AccountService
//!        ▼
//! ┌──────────────┐
//! │ mc-02 backend│
//! └──────────────┘
//! ```
//!
//! Request decisions pass through the call-site gates in
//! [`domain::dashboard`] before they reach the store.

pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{App, Command, Route};
pub use error::AppError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
