//! The checkout flow: step-gated actions over the interaction layer.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::FlowError;
use crate::selectors::CheckoutSelectors;
use crate::steps::{CheckoutStep, StepClassifier};
use shopflow_interaction::{InteractError, Interactor, UntilPolicy};

/// Payment details for the final checkout step. Number and security code
/// flow through fill-redaction and never reach logs literally.
#[derive(Clone, Debug)]
pub struct PaymentCard {
    pub owner: String,
    pub number: String,
    pub expiry: String,
    pub security_code: String,
}

type ClassifierFn = dyn Fn(&str) -> CheckoutStep + Send + Sync;

/// Multi-step checkout driven through the resilient interaction layer.
///
/// The current step is recomputed from the live location on every query;
/// nothing is cached, so redirects between calls are always observed.
pub struct CheckoutFlow {
    interactor: Interactor,
    classifier: Arc<ClassifierFn>,
    selectors: CheckoutSelectors,
    tempo: (Duration, Duration),
}

impl CheckoutFlow {
    pub fn new(interactor: Interactor) -> Self {
        let classifier = StepClassifier::default();
        Self {
            interactor,
            classifier: Arc::new(move |location| classifier.classify(location)),
            selectors: CheckoutSelectors::default(),
            tempo: (Duration::from_millis(500), Duration::from_millis(1000)),
        }
    }

    /// Replace the location classifier, e.g. for storefronts with other
    /// URL schemes.
    pub fn with_classifier(
        mut self,
        classifier: impl Fn(&str) -> CheckoutStep + Send + Sync + 'static,
    ) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn with_selectors(mut self, selectors: CheckoutSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Bounds of the human-like pause between consecutive form fills.
    pub fn with_tempo(mut self, min: Duration, max: Duration) -> Self {
        self.tempo = (min, max.max(min));
        self
    }

    pub fn interactor(&self) -> &Interactor {
        &self.interactor
    }

    /// Classify the live location into a checkout step.
    pub async fn current_step(&self) -> Result<CheckoutStep, FlowError> {
        let location = self
            .interactor
            .driver()
            .current_url()
            .await
            .map_err(InteractError::from)?;
        Ok((self.classifier)(&location))
    }

    /// Select a delivery option by explicit index, then advance to the
    /// payment step. Returns whether payment was actually reached.
    ///
    /// The index is validated against the resolved option count before any
    /// click happens.
    pub async fn select_delivery_option(&self, index: usize) -> Result<bool, FlowError> {
        self.require_step(CheckoutStep::Delivery).await?;
        info!(index, "selecting delivery option");

        let options = self
            .interactor
            .driver()
            .query(&self.selectors.delivery_options)
            .await
            .map_err(InteractError::from)?;
        if index >= options.len() {
            warn!(
                index,
                available = options.len(),
                "delivery option index out of range"
            );
            return Err(FlowError::OptionOutOfRange {
                index,
                available: options.len(),
            });
        }

        self.interactor
            .driver()
            .click(&options[index], false)
            .await
            .map_err(InteractError::from)?;
        self.pause().await;

        self.interactor.click(&self.selectors.proceed).await?;
        self.interactor
            .wait_for_navigation_settled(UntilPolicy::NetworkIdle)
            .await?;

        Ok(self.current_step().await? == CheckoutStep::Payment)
    }

    /// Fill the payment form. Gated on the payment step.
    pub async fn fill_payment_info(&self, card: &PaymentCard) -> Result<(), FlowError> {
        self.require_step(CheckoutStep::Payment).await?;
        info!(owner = %card.owner, "filling payment details");

        self.interactor
            .fill(&self.selectors.card_owner, &card.owner)
            .await?;
        self.pause().await;
        self.interactor
            .fill(&self.selectors.card_number, &card.number)
            .await?;
        self.pause().await;
        self.interactor
            .fill(&self.selectors.card_expiration, &card.expiry)
            .await?;
        self.pause().await;
        self.interactor
            .fill(&self.selectors.card_security_code, &card.security_code)
            .await?;
        Ok(())
    }

    /// Submit the order. Gated on the payment step; returns whether the
    /// confirmation step was reached.
    pub async fn place_order(&self) -> Result<bool, FlowError> {
        self.require_step(CheckoutStep::Payment).await?;
        info!("placing order");

        self.interactor.click(&self.selectors.place_order).await?;
        self.interactor
            .wait_for_navigation_settled(UntilPolicy::NetworkIdle)
            .await?;

        Ok(self.current_step().await? == CheckoutStep::Confirmation)
    }

    pub async fn is_order_confirmed(&self) -> Result<bool, FlowError> {
        Ok(self.current_step().await? == CheckoutStep::Confirmation)
    }

    /// Extract the order number from the confirmation page; empty when the
    /// element carries no digits.
    pub async fn order_number(&self) -> Result<String, FlowError> {
        self.require_step(CheckoutStep::Confirmation).await?;
        let text = self
            .interactor
            .text_of(&self.selectors.order_number, "")
            .await;
        Ok(first_digit_run(&text))
    }

    async fn require_step(&self, expected: CheckoutStep) -> Result<(), FlowError> {
        let actual = self.current_step().await?;
        if actual != expected {
            warn!(%expected, %actual, "step guard rejected action");
            return Err(FlowError::WrongStep { expected, actual });
        }
        Ok(())
    }

    async fn pause(&self) {
        let (min, max) = self.tempo;
        let duration = if min == max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        sleep(duration).await;
    }
}

/// First contiguous run of ASCII digits in `text`.
fn first_digit_run(text: &str) -> String {
    text.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect()
}
