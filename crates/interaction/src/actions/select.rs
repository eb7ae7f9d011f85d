//! Select executor.

use shopflow_core_types::{ActionId, Locator, RetryPolicy};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::{ActionKind, InteractError};
use crate::interactor::Interactor;
use crate::ports::DriverError;
use crate::waiting;

/// Select one or more values in the dropdown/listbox behind `locator`.
pub(crate) async fn execute_select(
    ix: &Interactor,
    locator: &Locator,
    values: &[String],
    policy: &RetryPolicy,
) -> Result<(), InteractError> {
    let action_id = ActionId::new();
    info!(action_id = %action_id, %locator, ?values, "executing select");

    let mut attempt = 1u32;
    let last_err = loop {
        match try_select(ix, locator, values).await {
            Ok(()) => {
                info!(action_id = %action_id, attempt, "select succeeded");
                return Ok(());
            }
            Err(err) => {
                warn!(
                    action_id = %action_id,
                    %locator,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    error = %err,
                    "select attempt failed"
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
        .capture(&format!("select_failed_{}", locator))
        .await;
    Err(InteractError::ActionFailed {
        action: ActionKind::Select,
        locator: locator.clone(),
        attempts: policy.max_attempts(),
        source: last_err,
    })
}

async fn try_select(
    ix: &Interactor,
    locator: &Locator,
    values: &[String],
) -> Result<(), DriverError> {
    let handle = waiting::resolve(ix, locator, ix.config().default_timeout()).await?;
    ix.driver().select_option(&handle, values).await
}
