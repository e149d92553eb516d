use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::cart::LineItem;
use super::errors::DomainError;
use super::order::OrderView;
use super::totals::OrderTotals;

/// The durable slot backing cart survival across restarts: a single
/// key-value location holding the serialized cart.
///
/// The slot is best-effort, not authoritative; callers treat unreadable
/// content as an empty cart. Writes replace the whole slot in one step.
pub trait CartSlot: Send + Sync + 'static {
    /// Returns the raw slot payload, or `None` if nothing has been stored.
    fn read(&self) -> Result<Option<String>, DomainError>;
    /// Replaces the slot content with `payload` in a single write.
    fn write(&self, payload: &str) -> Result<(), DomainError>;
    /// Empties the slot. Clearing an already-empty slot is a no-op.
    fn clear(&self) -> Result<(), DomainError>;
}

/// Upstream collaborator: resolves the unit price of a product at
/// add-to-cart time. The cart locks in whatever price this returns.
pub trait ProductCatalog: Send + Sync + 'static {
    fn unit_price(&self, product_id: &str) -> Result<BigDecimal, DomainError>;
}

/// Downstream collaborator: turns the current cart and its totals into a
/// submitted order. On success the caller clears the cart.
pub trait CheckoutGateway: Send + Sync + 'static {
    fn submit(&self, items: &[LineItem], totals: &OrderTotals) -> Result<Uuid, DomainError>;
}

/// Read side of the order log, backing the order-history page.
pub trait OrderHistory: Send + Sync + 'static {
    /// Lists submitted orders, newest first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
}
