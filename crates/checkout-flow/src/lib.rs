//! Step-gated checkout workflow.
//!
//! Illustrates the workflow-state machinery on a four-stage checkout:
//! the current step is derived on demand from the page location by a
//! pluggable classifier, and every state-dependent action asserts its
//! expected step before touching the page. Site specifics (selectors,
//! URL fragments) stay data, injected through [`CheckoutSelectors`] and
//! [`StepClassifier`].

pub mod errors;
mod flow;
pub mod selectors;
pub mod steps;

pub use errors::FlowError;
pub use flow::{CheckoutFlow, PaymentCard};
pub use selectors::CheckoutSelectors;
pub use steps::{CheckoutStep, StepClassifier};
