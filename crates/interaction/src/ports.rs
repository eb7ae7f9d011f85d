//! Driver-facing port for the external page-automation engine.
//!
//! The engine that actually renders pages (CDP, WebDriver, an in-process
//! fake in tests) implements [`PageDriver`]; everything above wires against
//! the trait only. The error shape mirrors what adapters report: a coarse
//! kind, an optional human hint, and a retriability flag.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopflow_core_types::Locator;
use thiserror::Error;

/// Load-settle policies understood by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum UntilPolicy {
    /// The `load` event fired.
    Load,
    /// The DOM finished parsing.
    DomContentLoaded,
    /// No network activity for the engine's quiet window.
    NetworkIdle,
}

impl Default for UntilPolicy {
    fn default() -> Self {
        UntilPolicy::NetworkIdle
    }
}

/// Opaque handle to one resolved element, valid until the page mutates.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub String);

/// High-level error categories surfaced by the driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error, Serialize, Deserialize)]
pub enum DriverErrorKind {
    #[error("operation timed out")]
    Timeout,
    #[error("target element not found")]
    TargetNotFound,
    #[error("option not found")]
    OptionNotFound,
    #[error("engine i/o failure")]
    Io,
    #[error("internal error")]
    Internal,
}

/// Enriched error metadata passed back from the driver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriverError {
    pub kind: DriverErrorKind,
    pub hint: Option<String>,
    pub retriable: bool,
}

impl DriverError {
    pub fn new(kind: DriverErrorKind) -> Self {
        Self {
            kind,
            hint: None,
            retriable: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn retriable(mut self, flag: bool) -> Self {
        self.retriable = flag;
        self
    }

    /// Whether this failure is a timeout, the one category the layer may
    /// absorb as advisory.
    pub fn is_timeout(&self) -> bool {
        self.kind == DriverErrorKind::Timeout
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            DriverErrorKind::TargetNotFound | DriverErrorKind::Timeout
        )
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hint) = &self.hint {
            write!(f, ": {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for DriverError {}

/// Primitive surface consumed from the browser-automation engine.
///
/// All operations act on the live page the driver wraps. One driver handle
/// corresponds to one page session; the layer never creates or destroys
/// sessions, only issues operations against them, strictly in call order.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to an absolute URL and wait for the given load state.
    async fn navigate(
        &self,
        url: &str,
        until: UntilPolicy,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    /// Resolve a locator to zero-or-more element handles, without waiting.
    async fn query(&self, locator: &Locator) -> Result<Vec<ElementHandle>, DriverError>;

    /// Block until the locator resolves to at least one element.
    async fn wait_for_selector(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementHandle, DriverError>;

    async fn scroll_into_view(&self, handle: &ElementHandle) -> Result<(), DriverError>;

    async fn click(&self, handle: &ElementHandle, force: bool) -> Result<(), DriverError>;

    async fn fill(&self, handle: &ElementHandle, value: &str) -> Result<(), DriverError>;

    async fn select_option(
        &self,
        handle: &ElementHandle,
        values: &[String],
    ) -> Result<(), DriverError>;

    async fn is_visible(&self, locator: &Locator, timeout: Duration) -> Result<bool, DriverError>;

    /// Block until the page reaches the given load state.
    async fn wait_for_load_state(
        &self,
        until: UntilPolicy,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    /// Block until the current URL matches the pattern (substring or regex,
    /// engine-defined).
    async fn wait_for_url(&self, pattern: &str, timeout: Duration) -> Result<(), DriverError>;

    async fn screenshot(&self, path: &Path, full_page: bool) -> Result<(), DriverError>;

    async fn current_url(&self) -> Result<String, DriverError>;

    async fn text_content(&self, handle: &ElementHandle) -> Result<Option<String>, DriverError>;

    async fn attribute(
        &self,
        handle: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError>;
}
