//! Shared primitives for the shopflow interaction crates.
//!
//! Kept deliberately small: selector and retry-policy types that every layer
//! agrees on, with no dependency on the driver port or the executor.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for one executor invocation, used for log correlation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque selector identifying zero-or-more elements in the current page.
///
/// Resolution is lazy: the external engine interprets the string at call
/// time and may yield any number of matches. Callers assume at least one
/// unless documented otherwise.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Locator(String);

impl Locator {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the selector text indicates a secret-bearing field.
    ///
    /// Values filled into such fields must never reach logs literally; see
    /// the redaction helpers in the interaction crate.
    pub fn describes_secret(&self) -> bool {
        const MARKERS: [&str; 6] = [
            "password",
            "passwd",
            "secret",
            "cvv",
            "security",
            "cardnumber",
        ];
        let lowered = self.0.to_ascii_lowercase();
        MARKERS.iter().any(|marker| lowered.contains(marker))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for Locator {
    fn from(selector: String) -> Self {
        Self(selector)
    }
}

/// Violations of the retry-policy invariants.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    #[error("backoff_min {min:?} exceeds backoff_max {max:?}")]
    BackoffInverted { min: Duration, max: Duration },
    #[error("backoff seconds must be finite and non-negative")]
    InvalidBackoff,
}

/// Bounded-attempts-with-jittered-backoff configuration shared by every
/// retrying operation.
///
/// Invariants (`max_attempts >= 1`, `backoff_min <= backoff_max`) are
/// enforced at construction, so holders never need to re-validate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_min: Duration,
    backoff_max: Duration,
}

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        backoff_min: Duration,
        backoff_max: Duration,
    ) -> Result<Self, PolicyError> {
        if max_attempts == 0 {
            return Err(PolicyError::ZeroAttempts);
        }
        if backoff_min > backoff_max {
            return Err(PolicyError::BackoffInverted {
                min: backoff_min,
                max: backoff_max,
            });
        }
        Ok(Self {
            max_attempts,
            backoff_min,
            backoff_max,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff_min(&self) -> Duration {
        self.backoff_min
    }

    pub fn backoff_max(&self) -> Duration {
        self.backoff_max
    }

    /// Draw a uniformly random backoff duration in
    /// `[backoff_min, backoff_max]` inclusive.
    pub fn jitter(&self) -> Duration {
        if self.backoff_min == self.backoff_max {
            return self.backoff_min;
        }
        rand::thread_rng().gen_range(self.backoff_min..=self.backoff_max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_min: Duration::from_millis(500),
            backoff_max: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_rejects_zero_attempts() {
        let err = RetryPolicy::new(0, Duration::ZERO, Duration::from_secs(1));
        assert_eq!(err, Err(PolicyError::ZeroAttempts));
    }

    #[test]
    fn policy_rejects_inverted_backoff() {
        let err = RetryPolicy::new(3, Duration::from_secs(2), Duration::from_secs(1));
        assert!(matches!(err, Err(PolicyError::BackoffInverted { .. })));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let policy = RetryPolicy::new(
            3,
            Duration::from_millis(100),
            Duration::from_millis(300),
        )
        .unwrap();
        for _ in 0..200 {
            let delay = policy.jitter();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(300));
        }
    }

    #[test]
    fn jitter_is_exact_for_degenerate_range() {
        let policy = RetryPolicy::new(
            1,
            Duration::from_millis(250),
            Duration::from_millis(250),
        )
        .unwrap();
        assert_eq!(policy.jitter(), Duration::from_millis(250));
    }

    #[test]
    fn secret_markers_are_case_insensitive() {
        assert!(Locator::new("#login-password-input").describes_secret());
        assert!(Locator::new("#encryptedSecurityCode").describes_secret());
        assert!(Locator::new("#encryptedCardNumber").describes_secret());
        assert!(!Locator::new("#login-email-input").describes_secret());
        assert!(!Locator::new(".product-libelle").describes_secret());
    }

    #[test]
    fn action_ids_are_unique() {
        assert_ne!(ActionId::new(), ActionId::new());
    }
}
