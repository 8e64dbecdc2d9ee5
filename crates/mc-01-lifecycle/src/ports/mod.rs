//! # Ports Layer
//!
//! - `inbound`: what views may ask of the store
//! - `outbound`: what the store needs from the outside (time)

pub mod inbound;
pub mod outbound;

pub use inbound::LifecycleApi;
pub use outbound::{Clock, FixedClock, SystemClock};
