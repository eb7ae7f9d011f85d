//! Error types for the checkout flow.

use thiserror::Error;

use crate::steps::CheckoutStep;
use shopflow_interaction::InteractError;

#[derive(Debug, Error)]
pub enum FlowError {
    /// A step-gated action was invoked outside its step. The underlying
    /// action was not attempted.
    #[error("expected step {expected}, current step is {actual}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },

    /// An explicit option index did not exist on the page. Guards against
    /// positional guesses into option lists whose size the DOM controls.
    #[error("option index {index} out of range ({available} available)")]
    OptionOutOfRange { index: usize, available: usize },

    #[error(transparent)]
    Interact(#[from] InteractError),
}
