//! Fill executor.

use shopflow_core_types::{ActionId, Locator, RetryPolicy};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::{ActionKind, InteractError};
use crate::interactor::Interactor;
use crate::ports::DriverError;
use crate::{redact, waiting};

/// Fill the form field behind `locator` with `value`.
///
/// The logged value goes through [`redact::mask_value`]: fields whose
/// locator indicates a secret get a same-length mask, never the literal.
pub(crate) async fn execute_fill(
    ix: &Interactor,
    locator: &Locator,
    value: &str,
    policy: &RetryPolicy,
) -> Result<(), InteractError> {
    let action_id = ActionId::new();
    info!(
        action_id = %action_id,
        %locator,
        value = %redact::mask_value(locator, value),
        "executing fill"
    );

    let mut attempt = 1u32;
    let last_err = loop {
        match try_fill(ix, locator, value).await {
            Ok(()) => {
                info!(action_id = %action_id, attempt, "fill succeeded");
                return Ok(());
            }
            Err(err) => {
                warn!(
                    action_id = %action_id,
                    %locator,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    error = %err,
                    "fill attempt failed"
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
        .capture(&format!("fill_failed_{}", locator))
        .await;
    Err(InteractError::ActionFailed {
        action: ActionKind::Fill,
        locator: locator.clone(),
        attempts: policy.max_attempts(),
        source: last_err,
    })
}

async fn try_fill(ix: &Interactor, locator: &Locator, value: &str) -> Result<(), DriverError> {
    let handle = waiting::resolve(ix, locator, ix.config().default_timeout()).await?;
    ix.driver().fill(&handle, value).await
}
