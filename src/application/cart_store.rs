use bigdecimal::BigDecimal;
use log::warn;

use crate::domain::cart::Cart;
use crate::domain::errors::DomainError;
use crate::domain::ports::CartSlot;
use crate::models::line_item::StoredLineItem;

/// The cart persistence store: owns the durable slot and keeps the persisted
/// copy in lockstep with every mutation.
///
/// Reads are best-effort (anything unreadable is an empty cart); writes are
/// a single whole-cart replacement per mutation. On a failed write the error
/// propagates and the previously persisted cart stays authoritative.
pub struct CartStore<S> {
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Reconstructs the cart from the slot. A missing, empty, or malformed
    /// slot yields an empty cart; this never fails the caller.
    pub fn load(&self) -> Cart {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!("Cart slot unreadable, starting from an empty cart: {e}");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Vec<StoredLineItem>>(&payload) {
            Ok(records) => Cart::from_items(
                records
                    .into_iter()
                    .map(StoredLineItem::into_line_item)
                    .collect(),
            ),
            Err(e) => {
                warn!("Cart slot content malformed, starting from an empty cart: {e}");
                Cart::new()
            }
        }
    }

    /// Persists the whole cart as one serialized write.
    pub fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        let records: Vec<StoredLineItem> = cart.items().iter().map(StoredLineItem::from).collect();
        let payload =
            serde_json::to_string(&records).map_err(|e| DomainError::Storage(e.to_string()))?;
        self.slot.write(&payload)
    }

    pub fn add_or_increment(
        &self,
        product_id: &str,
        unit_price: BigDecimal,
        quantity: i32,
    ) -> Result<Cart, DomainError> {
        let mut cart = self.load();
        cart.add_or_increment(product_id, unit_price, quantity);
        self.save(&cart)?;
        Ok(cart)
    }

    pub fn update_quantity(&self, product_id: &str, quantity: i32) -> Result<Cart, DomainError> {
        let mut cart = self.load();
        cart.update_quantity(product_id, quantity);
        self.save(&cart)?;
        Ok(cart)
    }

    pub fn remove(&self, product_id: &str) -> Result<Cart, DomainError> {
        let mut cart = self.load();
        cart.remove(product_id);
        self.save(&cart)?;
        Ok(cart)
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        self.slot.clear()
    }
}
