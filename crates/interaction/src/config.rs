//! Explicit configuration for the interaction layer.
//!
//! An [`InteractConfig`] is passed to constructors so tests can override
//! timeouts and retry budgets without process-wide mutation. How the values
//! are sourced (environment, files) is the embedding application's concern.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shopflow_core_types::{PolicyError, RetryPolicy};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractConfig {
    /// Upper bound for blocking waits, in milliseconds.
    pub default_timeout_ms: u64,
    /// Shorter bound used by soft visibility probes, in milliseconds.
    pub default_wait_ms: u64,
    /// Attempts per retried action.
    pub retry_count: u32,
    /// Destination directory for diagnostic screenshots.
    pub screenshot_directory: PathBuf,
    /// Lower bound of the jittered retry backoff, in seconds.
    pub backoff_min_s: f64,
    /// Upper bound of the jittered retry backoff, in seconds.
    pub backoff_max_s: f64,
    /// Prefix applied to relative navigation targets. Empty means targets
    /// must already be absolute.
    pub base_url: String,
}

impl Default for InteractConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: 30_000,
            default_wait_ms: 5_000,
            retry_count: 3,
            screenshot_directory: PathBuf::from("screenshots"),
            backoff_min_s: 0.5,
            backoff_max_s: 2.0,
            base_url: String::new(),
        }
    }
}

impl InteractConfig {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    pub fn default_wait(&self) -> Duration {
        Duration::from_millis(self.default_wait_ms)
    }

    /// Derive the typed retry policy, validating the configured bounds.
    pub fn retry_policy(&self) -> Result<RetryPolicy, PolicyError> {
        let backoff_min = Duration::try_from_secs_f64(self.backoff_min_s)
            .map_err(|_| PolicyError::InvalidBackoff)?;
        let backoff_max = Duration::try_from_secs_f64(self.backoff_max_s)
            .map_err(|_| PolicyError::InvalidBackoff)?;
        RetryPolicy::new(self.retry_count, backoff_min, backoff_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = InteractConfig::default();
        assert_eq!(config.default_timeout(), Duration::from_secs(30));
        assert_eq!(config.default_wait(), Duration::from_secs(5));
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.screenshot_directory, PathBuf::from("screenshots"));
    }

    #[test]
    fn retry_policy_reflects_config() {
        let config = InteractConfig {
            retry_count: 5,
            backoff_min_s: 0.1,
            backoff_max_s: 0.2,
            ..InteractConfig::default()
        };
        let policy = config.retry_policy().unwrap();
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.backoff_min(), Duration::from_millis(100));
        assert_eq!(policy.backoff_max(), Duration::from_millis(200));
    }

    #[test]
    fn negative_backoff_is_rejected() {
        let config = InteractConfig {
            backoff_min_s: -1.0,
            ..InteractConfig::default()
        };
        assert_eq!(config.retry_policy(), Err(PolicyError::InvalidBackoff));
    }
}
