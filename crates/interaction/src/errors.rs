//! Error types for the interaction layer.
//!
//! Only structural failures appear here. Advisory conditions (navigation
//! settle, custom predicates) are absorbed locally and surfaced as warnings
//! or boolean results, never as errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use shopflow_core_types::{Locator, PolicyError};
use thiserror::Error;

use crate::ports::DriverError;

/// The user-facing actions the executor models.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Click,
    Fill,
    Select,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Click => "click",
            ActionKind::Fill => "fill",
            ActionKind::Select => "select",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures surfaced to workflow callers.
///
/// `ElementNotFound` and `ActionFailed` are always preceded by a
/// diagnostic capture at the point of failure. `Driver` passes through
/// engine failures the layer did not classify as its own; `Config` is
/// raised before any page is touched.
#[derive(Clone, Debug, Error)]
pub enum InteractError {
    /// An element wait elapsed without a resolution. Always hard: every
    /// executor step depends on a resolved handle.
    #[error("element not found: {locator} (waited {timeout_ms}ms)")]
    ElementNotFound { locator: Locator, timeout_ms: u64 },

    /// An action exhausted its retry budget; carries the last driver error.
    #[error("{action} on {locator} failed after {attempts} attempts: {source}")]
    ActionFailed {
        action: ActionKind,
        locator: Locator,
        attempts: u32,
        #[source]
        source: DriverError,
    },

    /// Non-timeout engine failure passed through unchanged.
    #[error("driver failure: {0}")]
    Driver(#[from] DriverError),

    /// The supplied configuration violates a policy invariant.
    #[error("invalid configuration: {0}")]
    Config(#[from] PolicyError),
}
