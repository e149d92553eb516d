use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::LineItem;

/// Serialized form of a cart line as written to the durable slot.
///
/// The field names (`productId`, `quantity`, `unitPrice`, `subtotal`) are a
/// compatibility contract with storefront clients that read the slot
/// directly; they must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLineItem {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.clone(),
            subtotal: item.subtotal.clone(),
        }
    }
}

impl StoredLineItem {
    /// Converts back into a domain line item. The stored subtotal is
    /// discarded and re-derived from price and quantity, so a stale or
    /// tampered slot can never smuggle in an inconsistent subtotal.
    pub fn into_line_item(self) -> LineItem {
        LineItem::new(self.product_id, self.quantity, self.unit_price)
    }
}
