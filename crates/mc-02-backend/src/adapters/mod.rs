//! # Adapters
//!
//! - [`http`]: REST client for the hosted backend
//! - [`memory`]: in-process backend for tests and `--demo`

pub mod http;
pub mod memory;

pub use http::ManagedBackendClient;
pub use memory::{BackendOperation, InMemoryBackend};
