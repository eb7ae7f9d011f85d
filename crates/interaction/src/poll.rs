//! Generic condition polling.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{debug, warn};

/// Evaluate `predicate` until it returns `true` or `timeout` elapses.
///
/// Returns `true` as soon as the predicate holds, with no further waiting.
/// A timeout is logged and reported as `false`; this is the one primitive
/// designed for non-fatal, caller-interpreted timeouts, so it never raises
/// and never captures a screenshot. `interval` is the minimum gap between
/// evaluations.
pub async fn wait_until<F, Fut>(mut predicate: F, timeout: Duration, interval: Duration) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    debug!(
        timeout_ms = timeout.as_millis() as u64,
        interval_ms = interval.as_millis() as u64,
        "polling condition"
    );
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate().await {
            return true;
        }
        sleep(interval).await;
    }
    warn!(
        timeout_ms = timeout.as_millis() as u64,
        "condition not met before timeout"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn true_predicate_returns_immediately() {
        let start = Instant::now();
        let outcome = wait_until(
            || async { true },
            Duration::from_millis(500),
            Duration::from_millis(100),
        )
        .await;
        assert!(outcome);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn predicate_converging_on_third_evaluation() {
        let calls = Arc::new(AtomicU32::new(0));
        let counted = calls.clone();
        let start = Instant::now();
        let outcome = wait_until(
            move || {
                let calls = counted.clone();
                async move { calls.fetch_add(1, Ordering::SeqCst) + 1 >= 3 }
            },
            Duration::from_millis(500),
            Duration::from_millis(50),
        )
        .await;
        assert!(outcome);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Two interval waits happened before the third evaluation.
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn timeout_reports_false() {
        let outcome = wait_until(
            || async { false },
            Duration::from_millis(120),
            Duration::from_millis(40),
        )
        .await;
        assert!(!outcome);
    }
}
