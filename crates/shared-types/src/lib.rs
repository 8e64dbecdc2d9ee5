//! # Shared Types Crate
//!
//! This crate contains the record types every other crate in the workspace
//! speaks: the worker profile, client job requests and the sessions created
//! when a request is accepted.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `User`, `ClientRequest` and `ActiveSession`
//!   are defined here and nowhere else.
//! - **One Completeness Rule**: both the lifecycle store and the backend
//!   record mapping derive `profile_complete` and verification status through
//!   [`assess_profile`].
//! - **Plain Data**: no behaviour beyond status parsing and the rule above;
//!   lifecycle transitions live in `mc-01-lifecycle`.

pub mod entities;
pub mod errors;
pub mod profile;

pub use entities::*;
pub use errors::*;
pub use profile::*;
