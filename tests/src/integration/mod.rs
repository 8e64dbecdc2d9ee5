//! Cross-crate integration flows.

pub mod account_flows;
pub mod lifecycle_flows;
