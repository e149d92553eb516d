use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the product seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub unit_price: BigDecimal,
}
