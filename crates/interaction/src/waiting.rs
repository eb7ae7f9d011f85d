//! Wait engine: element waits and navigation settles.
//!
//! Element waits are hard failures: every executor step depends on a
//! resolved handle, so a missing element is always surfaced as a typed
//! error. Navigation and URL settles are advisory: a page can be usable
//! even if the network-idle signal never fires (ads, trackers,
//! long-polling), so their timeouts are logged and captured but never
//! block the caller.

use std::time::Duration;

use shopflow_core_types::Locator;
use tracing::{debug, error, warn};

use crate::errors::InteractError;
use crate::interactor::Interactor;
use crate::ports::{DriverError, ElementHandle, UntilPolicy};
use crate::redact;

/// Hard element wait. On timeout: capture a diagnostic labeled with the
/// locator, then raise `ElementNotFound`.
pub(crate) async fn wait_for_element(
    ix: &Interactor,
    locator: &Locator,
    timeout: Duration,
) -> Result<ElementHandle, InteractError> {
    debug!(%locator, "waiting for element");
    match ix.driver().wait_for_selector(locator, timeout).await {
        Ok(handle) => Ok(handle),
        Err(err) if err.is_not_found() => {
            let timeout_ms = timeout.as_millis() as u64;
            error!(%locator, timeout_ms, "element not found");
            ix.diagnostics()
                .capture(&format!("element_not_found_{}", locator))
                .await;
            Err(InteractError::ElementNotFound {
                locator: locator.clone(),
                timeout_ms,
            })
        }
        Err(err) => Err(InteractError::Driver(err)),
    }
}

/// Element wait without diagnostics, for use inside the retry skeleton so
/// a retried action produces exactly one artifact at exhaustion.
pub(crate) async fn resolve(
    ix: &Interactor,
    locator: &Locator,
    timeout: Duration,
) -> Result<ElementHandle, DriverError> {
    ix.driver().wait_for_selector(locator, timeout).await
}

/// Advisory navigation settle. A timeout is logged and captured, then the
/// call returns normally; other driver failures still propagate.
pub(crate) async fn wait_for_navigation_settled(
    ix: &Interactor,
    until: UntilPolicy,
    timeout: Duration,
) -> Result<(), InteractError> {
    debug!(?until, "waiting for navigation to settle");
    match ix.driver().wait_for_load_state(until, timeout).await {
        Ok(()) => Ok(()),
        Err(err) if err.is_timeout() => {
            warn!(?until, "timed out waiting for navigation to settle");
            ix.diagnostics().capture("navigation_wait_timeout").await;
            Ok(())
        }
        Err(err) => Err(InteractError::Driver(err)),
    }
}

/// Advisory URL wait, same timeout classification as the navigation settle.
pub(crate) async fn wait_for_url(
    ix: &Interactor,
    pattern: &str,
    timeout: Duration,
) -> Result<(), InteractError> {
    debug!(pattern, "waiting for url");
    match ix.driver().wait_for_url(pattern, timeout).await {
        Ok(()) => Ok(()),
        Err(err) if err.is_timeout() => {
            let current = ix
                .driver()
                .current_url()
                .await
                .map(|u| redact::url(&u))
                .unwrap_or_else(|_| "<unavailable>".to_string());
            warn!(pattern, current_url = %current, "timed out waiting for url");
            ix.diagnostics().capture("url_wait_timeout").await;
            Ok(())
        }
        Err(err) => Err(InteractError::Driver(err)),
    }
}
