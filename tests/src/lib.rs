//! # Maid Connect Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── account_flows.rs    # backend sign-up / sign-in → store
//!     └── lifecycle_flows.rs  # call-site gates → store → sessions
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mc-tests
//! cargo test -p mc-tests integration::lifecycle_flows
//! ```

pub mod integration;
