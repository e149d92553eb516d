use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::cart::LineItem;
use super::totals::OrderTotals;

/// A submitted order as shown on the order-history page.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<LineItem>,
    pub totals: OrderTotals,
}
