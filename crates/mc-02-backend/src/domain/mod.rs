//! # Domain Module
//!
//! Records exchanged with the managed backend and their mapping onto the
//! local user.

pub mod errors;
pub mod mapping;
pub mod records;

pub use errors::*;
pub use mapping::*;
pub use records::*;
