//! # Error Types
//!
//! Errors raised while interpreting shared records.

use thiserror::Error;

/// A status string did not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} status: {value:?}")]
pub struct ParseStatusError {
    /// Which status family was being parsed.
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

impl ParseStatusError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
