//! # Ports Layer
//!
//! Driven ports the account flows need from a managed backend.

pub mod outbound;

pub use outbound::{AuthProvider, FileStorage, ProfileRepository};
