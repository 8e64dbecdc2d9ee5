//! Configuration for the Lifecycle Subsystem

use serde::{Deserialize, Serialize};

/// Lifecycle configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Maximum sessions a worker may have `ongoing` at once (call-site policy)
    pub max_ongoing_sessions: usize,
    /// Days between a session's start and planned end
    pub session_length_days: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_ongoing_sessions: 3,
            session_length_days: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LifecycleConfig::default();
        assert_eq!(config.max_ongoing_sessions, 3);
        assert_eq!(config.session_length_days, 7);
    }
}
