//! Navigate executor.

use tracing::{info, warn};

use crate::errors::InteractError;
use crate::interactor::Interactor;
use crate::ports::UntilPolicy;
use crate::redact;

/// Navigate to `url`, prefixing the configured base URL for relative
/// targets, then wait for the requested load state.
///
/// The load-state timeout is advisory: the page may be partially usable
/// even when the settle signal never fires, so a timeout is logged and
/// captured and the call returns normally.
pub(crate) async fn execute_navigate(
    ix: &Interactor,
    url: &str,
    until: UntilPolicy,
) -> Result<(), InteractError> {
    let target = resolve_target(ix.config().base_url.as_str(), url);
    info!(url = %redact::url(&target), ?until, "navigating");

    match ix
        .driver()
        .navigate(&target, until, ix.config().default_timeout())
        .await
    {
        Ok(()) => Ok(()),
        Err(err) if err.is_timeout() => {
            warn!(
                url = %redact::url(&target),
                "navigation timed out; page may be partially loaded"
            );
            ix.diagnostics().capture("navigation_timeout").await;
            Ok(())
        }
        Err(err) => Err(InteractError::Driver(err)),
    }
}

fn resolve_target(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", base_url, url)
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_target;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_target("https://shop.example.com", "https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn relative_urls_get_the_base_prefix() {
        assert_eq!(
            resolve_target("https://shop.example.com", "/exec/panier.aspx"),
            "https://shop.example.com/exec/panier.aspx"
        );
    }
}
