//! Screenshot capture for failure postmortems.
//!
//! Every raised failure in this layer is preceded by a capture, so failures
//! are reproducible from a visual record. Capture itself must never mask
//! the failure being recorded: engine errors during capture are logged and
//! swallowed.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ports::PageDriver;

/// Record of one captured screenshot. Created once per failure event and
/// never mutated; cleanup of the file is external.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiagnosticArtifact {
    pub path: PathBuf,
    pub trigger_label: String,
    pub captured_at: DateTime<Utc>,
}

pub struct Diagnostics {
    driver: Arc<dyn PageDriver>,
    directory: PathBuf,
}

impl Diagnostics {
    pub fn new(driver: Arc<dyn PageDriver>, directory: PathBuf) -> Self {
        Self { driver, directory }
    }

    /// Capture the current viewport under a label describing the trigger.
    pub async fn capture(&self, label: &str) -> DiagnosticArtifact {
        self.capture_with(label, false).await
    }

    /// Capture the full scrollable page instead of just the viewport.
    pub async fn capture_full_page(&self, label: &str) -> DiagnosticArtifact {
        self.capture_with(label, true).await
    }

    async fn capture_with(&self, label: &str, full_page: bool) -> DiagnosticArtifact {
        let captured_at = Utc::now();
        let path = self
            .directory
            .join(artifact_filename(label, &captured_at));

        match self.driver.screenshot(&path, full_page).await {
            Ok(()) => info!(path = %path.display(), "screenshot captured"),
            Err(err) => warn!(label, error = %err, "screenshot capture failed"),
        }

        DiagnosticArtifact {
            path,
            trigger_label: label.to_string(),
            captured_at,
        }
    }
}

/// Deterministic artifact name: sanitized label plus a second-resolution
/// timestamp. The label is part of the name, so two captures in the same
/// second with different labels never collide.
fn artifact_filename(label: &str, at: &DateTime<Utc>) -> String {
    format!("{}_{}.png", sanitize_label(label), at.format("%Y%m%d_%H%M%S"))
}

/// Replace path-hostile characters so any locator text can become a file
/// name.
fn sanitize_label(raw: &str) -> String {
    let sanitized: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "capture".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn labels_are_sanitized_for_filenames() {
        assert_eq!(
            sanitize_label("element_not_found_#cart li:first"),
            "element_not_found__cart_li_first"
        );
        assert_eq!(sanitize_label(""), "capture");
    }

    #[test]
    fn same_second_different_labels_never_collide() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let a = artifact_filename("click_failed_#btn", &at);
        let b = artifact_filename("fill_failed_#btn", &at);
        assert_ne!(a, b);
        assert!(a.ends_with("20260314_092653.png"));
    }
}
