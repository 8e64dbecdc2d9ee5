//! # MC-01 Lifecycle
//!
//! Single source of truth for the worker, client requests and active
//! sessions within one application run.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Hold the current user, the request board and the session list
//! - Apply request decisions (`pending → accepted | rejected`, one shot)
//! - Spawn an `ongoing` session for every accepted request
//! - Cancel sessions (idempotent)
//! - Notify subscribed views after every applied mutation
//!
//! ## Policy Placement
//!
//! The store does not check approval or the ongoing-session cap. Those are
//! call-site policies exposed as pure functions in [`domain::policy`]; every
//! view that dispatches a decision must run them first.
//!
//! ## Module Structure
//!
//! ```text
//! mc-01-lifecycle/
//! ├── domain/          # AppState transitions, outcomes, policy, seed data
//! ├── ports/           # LifecycleApi (inbound), Clock (outbound)
//! └── service.rs       # AppStore: owns the state, publishes revisions
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use config::LifecycleConfig;
pub use domain::{
    check_accept, check_reject, ongoing_count, seed_client_requests, AppState, GateDenial,
    MutationOutcome, Transition,
};
pub use ports::{Clock, FixedClock, LifecycleApi, SystemClock};
pub use service::AppStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
