//! Selector map for the checkout pages.
//!
//! Kept as plain data so a different storefront only swaps this struct,
//! never the flow logic. Defaults target the reference storefront.

use serde::{Deserialize, Serialize};
use shopflow_core_types::Locator;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSelectors {
    /// All delivery options; resolution yields one handle per option.
    pub delivery_options: Locator,
    /// Button advancing to the next checkout step.
    pub proceed: Locator,
    pub card_owner: Locator,
    pub card_number: Locator,
    pub card_expiration: Locator,
    pub card_security_code: Locator,
    pub place_order: Locator,
    pub order_number: Locator,
}

impl Default for CheckoutSelectors {
    fn default() -> Self {
        Self {
            delivery_options: Locator::new(".relative.w-fulls"),
            proceed: Locator::new("#btn_confirmation_pc"),
            card_owner: Locator::new("#cardHolderName"),
            card_number: Locator::new("#encryptedCardNumber"),
            card_expiration: Locator::new("#encryptedExpiryDate"),
            card_security_code: Locator::new("#encryptedSecurityCode"),
            place_order: Locator::new("#btn_confirmation"),
            order_number: Locator::new(".order-number"),
        }
    }
}
