//! Click executor.

use shopflow_core_types::{ActionId, Locator, RetryPolicy};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::{ActionKind, InteractError};
use crate::interactor::Interactor;
use crate::ports::DriverError;
use crate::waiting;

/// Click the element behind `locator`, scrolling it into view first.
///
/// Steps per attempt:
/// 1. Resolve the locator (bounded by the default timeout).
/// 2. Scroll the target into view.
/// 3. Dispatch the click (`force` bypasses the engine's actionability
///    checks).
pub(crate) async fn execute_click(
    ix: &Interactor,
    locator: &Locator,
    force: bool,
    policy: &RetryPolicy,
) -> Result<(), InteractError> {
    let action_id = ActionId::new();
    info!(action_id = %action_id, %locator, force, "executing click");

    let mut attempt = 1u32;
    let last_err = loop {
        match try_click(ix, locator, force).await {
            Ok(()) => {
                info!(action_id = %action_id, attempt, "click succeeded");
                return Ok(());
            }
            Err(err) => {
                warn!(
                    action_id = %action_id,
                    %locator,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    error = %err,
                    "click attempt failed"
                );
                if attempt >= policy.max_attempts() {
                    break err;
                }
                sleep(policy.jitter()).await;
                attempt += 1;
            }
        }
    };

    ix.diagnostics()
        .capture(&format!("click_failed_{}", locator))
        .await;
    Err(InteractError::ActionFailed {
        action: ActionKind::Click,
        locator: locator.clone(),
        attempts: policy.max_attempts(),
        source: last_err,
    })
}

async fn try_click(ix: &Interactor, locator: &Locator, force: bool) -> Result<(), DriverError> {
    let handle = waiting::resolve(ix, locator, ix.config().default_timeout()).await?;
    ix.driver().scroll_into_view(&handle).await?;
    ix.driver().click(&handle, force).await
}
