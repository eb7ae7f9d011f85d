//! The interactor: one resilient surface over one page session.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use shopflow_core_types::{Locator, PolicyError, RetryPolicy};
use tracing::warn;

use crate::actions;
use crate::config::InteractConfig;
use crate::diagnostics::Diagnostics;
use crate::errors::InteractError;
use crate::poll;
use crate::ports::{ElementHandle, PageDriver, UntilPolicy};
use crate::waiting;

/// Resilient interaction surface over a caller-owned page session.
///
/// The interactor never creates or destroys the session behind the driver
/// handle; it only issues operations against it, strictly in call order.
/// One interactor serves one logical workflow at a time — run concurrent
/// workflows against separate sessions.
pub struct Interactor {
    driver: Arc<dyn PageDriver>,
    diagnostics: Diagnostics,
    policy: RetryPolicy,
    config: InteractConfig,
}

impl Interactor {
    /// Build an interactor from an explicit configuration. Fails only when
    /// the configured retry bounds violate the policy invariants.
    pub fn new(driver: Arc<dyn PageDriver>, config: InteractConfig) -> Result<Self, PolicyError> {
        let policy = config.retry_policy()?;
        let diagnostics = Diagnostics::new(driver.clone(), config.screenshot_directory.clone());
        Ok(Self {
            driver,
            diagnostics,
            policy,
            config,
        })
    }

    pub fn driver(&self) -> &Arc<dyn PageDriver> {
        &self.driver
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn config(&self) -> &InteractConfig {
        &self.config
    }

    /// Navigate and wait for network idle; the settle timeout is advisory.
    pub async fn navigate(&self, url: &str) -> Result<(), InteractError> {
        actions::execute_navigate(self, url, UntilPolicy::NetworkIdle).await
    }

    /// Navigate with an explicit load-state policy.
    pub async fn navigate_until(
        &self,
        url: &str,
        until: UntilPolicy,
    ) -> Result<(), InteractError> {
        actions::execute_navigate(self, url, until).await
    }

    /// Hard element wait bounded by the default timeout.
    pub async fn wait_for_element(
        &self,
        locator: &Locator,
    ) -> Result<ElementHandle, InteractError> {
        waiting::wait_for_element(self, locator, self.config.default_timeout()).await
    }

    /// Hard element wait with an explicit bound.
    pub async fn wait_for_element_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementHandle, InteractError> {
        waiting::wait_for_element(self, locator, timeout).await
    }

    /// Advisory navigation settle; a timeout never fails the call.
    pub async fn wait_for_navigation_settled(
        &self,
        until: UntilPolicy,
    ) -> Result<(), InteractError> {
        waiting::wait_for_navigation_settled(self, until, self.config.default_timeout()).await
    }

    /// Advisory navigation settle with an explicit bound.
    pub async fn wait_for_navigation_settled_within(
        &self,
        until: UntilPolicy,
        timeout: Duration,
    ) -> Result<(), InteractError> {
        waiting::wait_for_navigation_settled(self, until, timeout).await
    }

    /// Advisory URL wait; a timeout never fails the call.
    pub async fn wait_for_url(&self, pattern: &str) -> Result<(), InteractError> {
        waiting::wait_for_url(self, pattern, self.config.default_timeout()).await
    }

    /// Click with the configured retry policy.
    pub async fn click(&self, locator: &Locator) -> Result<(), InteractError> {
        actions::execute_click(self, locator, false, &self.policy).await
    }

    /// Click with explicit force flag and retry policy.
    pub async fn click_with(
        &self,
        locator: &Locator,
        force: bool,
        policy: &RetryPolicy,
    ) -> Result<(), InteractError> {
        actions::execute_click(self, locator, force, policy).await
    }

    /// Fill with the configured retry policy.
    pub async fn fill(&self, locator: &Locator, value: &str) -> Result<(), InteractError> {
        actions::execute_fill(self, locator, value, &self.policy).await
    }

    /// Fill with an explicit retry policy.
    pub async fn fill_with(
        &self,
        locator: &Locator,
        value: &str,
        policy: &RetryPolicy,
    ) -> Result<(), InteractError> {
        actions::execute_fill(self, locator, value, policy).await
    }

    /// Select one or more values with the configured retry policy.
    pub async fn select(&self, locator: &Locator, values: &[String]) -> Result<(), InteractError> {
        actions::execute_select(self, locator, values, &self.policy).await
    }

    /// Convenience for the common single-value select.
    pub async fn select_value(&self, locator: &Locator, value: &str) -> Result<(), InteractError> {
        let values = [value.to_string()];
        actions::execute_select(self, locator, &values, &self.policy).await
    }

    /// Select with an explicit retry policy.
    pub async fn select_with(
        &self,
        locator: &Locator,
        values: &[String],
        policy: &RetryPolicy,
    ) -> Result<(), InteractError> {
        actions::execute_select(self, locator, values, policy).await
    }

    /// Soft visibility probe bounded by the shorter default wait. Engine
    /// failures read as "not visible".
    pub async fn is_visible(&self, locator: &Locator) -> bool {
        self.driver
            .is_visible(locator, self.config.default_wait())
            .await
            .unwrap_or(false)
    }

    /// Poll `predicate` until it holds or `timeout` elapses; soft timeout.
    pub async fn wait_until<F, Fut>(
        &self,
        predicate: F,
        timeout: Duration,
        interval: Duration,
    ) -> bool
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        poll::wait_until(predicate, timeout, interval).await
    }

    /// Text content of the first element behind `locator`, or `default`
    /// when resolution or extraction fails (logged, never raised).
    pub async fn text_of(&self, locator: &Locator, default: &str) -> String {
        match self.try_text(locator).await {
            Ok(Some(text)) => text,
            Ok(None) => default.to_string(),
            Err(err) => {
                warn!(%locator, error = %err, "could not read element text");
                default.to_string()
            }
        }
    }

    /// Attribute value of the first element behind `locator`, or `default`
    /// when resolution or extraction fails (logged, never raised).
    pub async fn attribute_of(&self, locator: &Locator, name: &str, default: &str) -> String {
        let attempt = async {
            let handle =
                waiting::resolve(self, locator, self.config.default_timeout()).await?;
            self.driver.attribute(&handle, name).await
        };
        match attempt.await {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(err) => {
                warn!(%locator, name, error = %err, "could not read element attribute");
                default.to_string()
            }
        }
    }

    async fn try_text(
        &self,
        locator: &Locator,
    ) -> Result<Option<String>, crate::ports::DriverError> {
        let handle = waiting::resolve(self, locator, self.config.default_timeout()).await?;
        self.driver.text_content(&handle).await
    }
}
