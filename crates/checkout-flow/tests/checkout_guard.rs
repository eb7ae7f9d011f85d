//! Step-guard behavior against a scripted storefront driver.

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use shopflow_checkout::{CheckoutFlow, CheckoutStep, FlowError, PaymentCard};
use shopflow_core_types::Locator;
use shopflow_interaction::{
    DriverError, ElementHandle, InteractConfig, Interactor, PageDriver, UntilPolicy,
};

const DELIVERY_URL: &str = "https://shop.example.com/commande/livraison";
const PAYMENT_URL: &str = "https://shop.example.com/commande/paiement";
const CONFIRMATION_URL: &str = "https://shop.example.com/commande/confirmation";

/// Fake storefront: clicking the proceed / place-order buttons moves the
/// current URL to the next checkout stage.
struct StorefrontDriver {
    url: Mutex<String>,
    delivery_option_count: usize,
    clicks: Mutex<Vec<String>>,
    fills: Mutex<Vec<(String, String)>>,
    resolves: Mutex<Vec<String>>,
}

impl StorefrontDriver {
    fn at(url: &str) -> Self {
        Self {
            url: Mutex::new(url.to_string()),
            delivery_option_count: 2,
            clicks: Mutex::new(Vec::new()),
            fills: Mutex::new(Vec::new()),
            resolves: Mutex::new(Vec::new()),
        }
    }

    fn action_call_count(&self) -> usize {
        self.clicks.lock().unwrap().len()
            + self.fills.lock().unwrap().len()
            + self.resolves.lock().unwrap().len()
    }
}

#[async_trait]
impl PageDriver for StorefrontDriver {
    async fn navigate(
        &self,
        url: &str,
        _until: UntilPolicy,
        _timeout: Duration,
    ) -> Result<(), DriverError> {
        *self.url.lock().unwrap() = url.to_string();
        Ok(())
    }

    async fn query(&self, locator: &Locator) -> Result<Vec<ElementHandle>, DriverError> {
        if locator.as_str() == ".relative.w-fulls" {
            Ok((0..self.delivery_option_count)
                .map(|i| ElementHandle(format!("delivery-option-{i}")))
                .collect())
        } else {
            Ok(vec![ElementHandle(locator.as_str().to_string())])
        }
    }

    async fn wait_for_selector(
        &self,
        locator: &Locator,
        _timeout: Duration,
    ) -> Result<ElementHandle, DriverError> {
        self.resolves.lock().unwrap().push(locator.as_str().to_string());
        Ok(ElementHandle(locator.as_str().to_string()))
    }

    async fn scroll_into_view(&self, _handle: &ElementHandle) -> Result<(), DriverError> {
        Ok(())
    }

    async fn click(&self, handle: &ElementHandle, _force: bool) -> Result<(), DriverError> {
        self.clicks.lock().unwrap().push(handle.0.clone());
        let next = match handle.0.as_str() {
            "#btn_confirmation_pc" => Some(PAYMENT_URL),
            "#btn_confirmation" => Some(CONFIRMATION_URL),
            _ => None,
        };
        if let Some(url) = next {
            *self.url.lock().unwrap() = url.to_string();
        }
        Ok(())
    }

    async fn fill(&self, handle: &ElementHandle, value: &str) -> Result<(), DriverError> {
        self.fills
            .lock()
            .unwrap()
            .push((handle.0.clone(), value.to_string()));
        Ok(())
    }

    async fn select_option(
        &self,
        _handle: &ElementHandle,
        _values: &[String],
    ) -> Result<(), DriverError> {
        Ok(())
    }

    async fn is_visible(&self, _locator: &Locator, _timeout: Duration) -> Result<bool, DriverError> {
        Ok(true)
    }

    async fn wait_for_load_state(
        &self,
        _until: UntilPolicy,
        _timeout: Duration,
    ) -> Result<(), DriverError> {
        Ok(())
    }

    async fn wait_for_url(&self, _pattern: &str, _timeout: Duration) -> Result<(), DriverError> {
        Ok(())
    }

    async fn screenshot(&self, _path: &Path, _full_page: bool) -> Result<(), DriverError> {
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        Ok(self.url.lock().unwrap().clone())
    }

    async fn text_content(&self, handle: &ElementHandle) -> Result<Option<String>, DriverError> {
        if handle.0 == ".order-number" {
            Ok(Some("Commande n°123456".to_string()))
        } else {
            Ok(None)
        }
    }

    async fn attribute(
        &self,
        _handle: &ElementHandle,
        _name: &str,
    ) -> Result<Option<String>, DriverError> {
        Ok(None)
    }
}

fn flow_at(url: &str) -> (Arc<StorefrontDriver>, CheckoutFlow) {
    let driver = Arc::new(StorefrontDriver::at(url));
    let config = InteractConfig {
        backoff_min_s: 0.001,
        backoff_max_s: 0.002,
        ..InteractConfig::default()
    };
    let interactor = Interactor::new(driver.clone(), config).unwrap();
    let flow = CheckoutFlow::new(interactor)
        .with_tempo(Duration::from_millis(1), Duration::from_millis(2));
    (driver, flow)
}

fn test_card() -> PaymentCard {
    PaymentCard {
        owner: "Test Utilisateur".to_string(),
        number: "4111111111111111".to_string(),
        expiry: "12/30".to_string(),
        security_code: "123".to_string(),
    }
}

#[tokio::test]
async fn payment_action_on_delivery_step_is_rejected_without_driver_calls() {
    let (driver, flow) = flow_at(DELIVERY_URL);

    let err = flow.fill_payment_info(&test_card()).await.unwrap_err();

    match err {
        FlowError::WrongStep { expected, actual } => {
            assert_eq!(expected, CheckoutStep::Payment);
            assert_eq!(actual, CheckoutStep::Delivery);
        }
        other => panic!("expected WrongStep, got {other:?}"),
    }
    assert_eq!(driver.action_call_count(), 0);
}

#[tokio::test]
async fn place_order_is_gated_on_the_payment_step() {
    let (driver, flow) = flow_at(CONFIRMATION_URL);

    let err = flow.place_order().await.unwrap_err();

    assert!(matches!(err, FlowError::WrongStep { .. }));
    assert_eq!(driver.action_call_count(), 0);
}

#[tokio::test]
async fn delivery_option_index_is_validated_before_clicking() {
    let (driver, flow) = flow_at(DELIVERY_URL);

    let err = flow.select_delivery_option(5).await.unwrap_err();

    match err {
        FlowError::OptionOutOfRange { index, available } => {
            assert_eq!(index, 5);
            assert_eq!(available, 2);
        }
        other => panic!("expected OptionOutOfRange, got {other:?}"),
    }
    assert!(driver.clicks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn selecting_a_delivery_option_advances_to_payment() {
    let (driver, flow) = flow_at(DELIVERY_URL);

    let reached_payment = flow.select_delivery_option(0).await.unwrap();

    assert!(reached_payment);
    let clicks = driver.clicks.lock().unwrap();
    assert_eq!(clicks[0], "delivery-option-0");
    assert_eq!(clicks[1], "#btn_confirmation_pc");
}

#[tokio::test]
async fn placing_the_order_reaches_confirmation() {
    let (_, flow) = flow_at(PAYMENT_URL);

    flow.fill_payment_info(&test_card()).await.unwrap();
    let confirmed = flow.place_order().await.unwrap();

    assert!(confirmed);
    assert!(flow.is_order_confirmed().await.unwrap());
    assert_eq!(flow.order_number().await.unwrap(), "123456");
}

#[tokio::test]
async fn custom_classifier_plugs_in_without_a_live_session() {
    let (_, flow) = flow_at("https://shop.example.com/checkout/step3");
    let flow = flow.with_classifier(|location: &str| {
        if location.ends_with("step3") {
            CheckoutStep::Payment
        } else {
            CheckoutStep::Unknown
        }
    });

    assert_eq!(flow.current_step().await.unwrap(), CheckoutStep::Payment);
}
