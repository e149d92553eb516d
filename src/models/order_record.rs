use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cart::LineItem;
use crate::domain::order::OrderView;
use crate::domain::totals::OrderTotals;

use super::line_item::StoredLineItem;

/// A confirmed order as appended to the order log, one JSON record per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<StoredLineItem>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

impl OrderRecord {
    pub fn confirmed(id: Uuid, items: &[LineItem], totals: &OrderTotals) -> Self {
        Self {
            id,
            status: "CONFIRMED".to_string(),
            created_at: Utc::now(),
            lines: items.iter().map(StoredLineItem::from).collect(),
            subtotal: totals.subtotal.clone(),
            tax: totals.tax.clone(),
            shipping: totals.shipping.clone(),
            total: totals.total.clone(),
        }
    }

    pub fn into_view(self) -> OrderView {
        OrderView {
            id: self.id,
            status: self.status,
            created_at: self.created_at,
            lines: self
                .lines
                .into_iter()
                .map(StoredLineItem::into_line_item)
                .collect(),
            totals: OrderTotals {
                subtotal: self.subtotal,
                tax: self.tax,
                shipping: self.shipping,
                total: self.total,
            },
        }
    }
}
