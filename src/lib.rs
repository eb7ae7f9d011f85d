//! Shopflow: resilient interaction for scripted shop workflows.
//!
//! The heart of the project is [`interaction`], a resilience layer over an
//! external page-automation engine: retrying executors for click/fill/
//! select, hard element waits, advisory navigation settles, generic
//! condition polling, and screenshot diagnostics on every raised failure.
//! [`checkout`] shows the workflow-state machinery on top of it, and
//! [`core_types`] carries the selector and retry-policy primitives both
//! share.
//!
//! Embedding applications implement [`interaction::PageDriver`] for their
//! engine of choice and hand one driver per page session to an
//! [`interaction::Interactor`].

pub use shopflow_checkout as checkout;
pub use shopflow_core_types as core_types;
pub use shopflow_interaction as interaction;

/// Commonly used types, for glob import in workflow code.
pub mod prelude {
    pub use shopflow_checkout::{
        CheckoutFlow, CheckoutSelectors, CheckoutStep, FlowError, PaymentCard, StepClassifier,
    };
    pub use shopflow_core_types::{ActionId, Locator, RetryPolicy};
    pub use shopflow_interaction::{
        retry, wait_until, DiagnosticArtifact, InteractConfig, InteractError, Interactor,
        PageDriver, UntilPolicy,
    };
}
