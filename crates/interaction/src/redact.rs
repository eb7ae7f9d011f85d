//! Log redaction helpers.

use shopflow_core_types::Locator;
use url::Url;

/// Render a fill value for logging. Values destined for a secret-bearing
/// field are replaced by a same-length `*` run, never the literal.
pub fn mask_value(locator: &Locator, value: &str) -> String {
    if locator.describes_secret() {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Strip query strings and fragments from a URL before logging.
pub fn url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => format!(
            "{}://{}{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or(""),
            parsed.path()
        ),
        Err(_) => raw.to_string(),
    }
}
