//! Operation-agnostic retry combinator.

use std::fmt::Display;
use std::future::Future;

use shopflow_core_types::RetryPolicy;
use tokio::time::sleep;
use tracing::warn;

/// Run `operation` with the same attempt/backoff semantics as the built-in
/// actions.
///
/// Any error counts as a failed attempt; once the budget is exhausted the
/// last error is returned unmodified — no wrapping type and no screenshot,
/// since the combinator has no notion of a page. This is the escape hatch
/// for operations the executor does not model.
pub async fn retry<T, E, F, Fut>(mut operation: F, policy: &RetryPolicy) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts(),
                    error = %err,
                    "retried operation failed"
                );
                if attempt >= policy.max_attempts() {
                    return Err(err);
                }
                sleep(policy.jitter()).await;
                attempt += 1;
            }
        }
    }
}
