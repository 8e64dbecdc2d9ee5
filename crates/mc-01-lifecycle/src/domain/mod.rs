//! # Domain Module
//!
//! Core domain types for the Lifecycle subsystem.

pub mod errors;
pub mod policy;
pub mod seed;
pub mod state;

pub use errors::*;
pub use policy::*;
pub use seed::*;
pub use state::*;
