//! Checkout steps and the location classifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// One discrete stage of the checkout process, derived from the page
/// location rather than stored. `Confirmation` is terminal; `Unknown`
/// catches every location the classifier does not recognize.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    Identification,
    Delivery,
    Payment,
    Confirmation,
    Unknown,
}

impl CheckoutStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutStep::Confirmation)
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckoutStep::Identification => "identification",
            CheckoutStep::Delivery => "delivery",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
            CheckoutStep::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Explicit location-to-step mapping, testable without a live session.
///
/// Fragments are matched against the URL path (falling back to the raw
/// location when it does not parse as a URL), first match wins. Matching
/// the path keeps the classification stable under query-string churn and
/// tracking parameters.
#[derive(Clone, Debug)]
pub struct StepClassifier {
    fragments: Vec<(String, CheckoutStep)>,
}

impl StepClassifier {
    pub fn new(fragments: Vec<(String, CheckoutStep)>) -> Self {
        Self { fragments }
    }

    pub fn classify(&self, location: &str) -> CheckoutStep {
        let haystack = match Url::parse(location) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => location.to_string(),
        };
        for (fragment, step) in &self.fragments {
            if haystack.contains(fragment.as_str()) {
                return *step;
            }
        }
        CheckoutStep::Unknown
    }
}

impl Default for StepClassifier {
    fn default() -> Self {
        Self::new(vec![
            ("identification".to_string(), CheckoutStep::Identification),
            ("livraison".to_string(), CheckoutStep::Delivery),
            ("paiement".to_string(), CheckoutStep::Payment),
            ("confirmation".to_string(), CheckoutStep::Confirmation),
        ])
    }
}
