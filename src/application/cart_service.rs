use log::info;
use uuid::Uuid;

use crate::domain::cart::Cart;
use crate::domain::errors::DomainError;
use crate::domain::ports::{CartSlot, CheckoutGateway, ProductCatalog};
use crate::domain::totals::{compute_totals, OrderTotals};

use super::cart_store::CartStore;

/// Storefront orchestration over the cart store and its collaborators: the
/// catalog resolves prices at add time, the gateway turns a cart into an
/// order at checkout.
pub struct CartService<S, C, G> {
    store: CartStore<S>,
    catalog: C,
    checkout: G,
}

impl<S, C, G> CartService<S, C, G>
where
    S: CartSlot,
    C: ProductCatalog,
    G: CheckoutGateway,
{
    pub fn new(slot: S, catalog: C, checkout: G) -> Self {
        Self {
            store: CartStore::new(slot),
            catalog,
            checkout,
        }
    }

    pub fn cart(&self) -> Cart {
        self.store.load()
    }

    pub fn totals(&self) -> OrderTotals {
        compute_totals(self.store.load().items())
    }

    /// Adds a product to the cart, resolving its unit price through the
    /// catalog. `quantity` defaults to 1; anything below 1 is rejected.
    pub fn add_to_cart(&self, product_id: &str, quantity: Option<i32>) -> Result<Cart, DomainError> {
        let quantity = quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be at least 1, got {quantity}"
            )));
        }
        let unit_price = self.catalog.unit_price(product_id)?;
        self.store.add_or_increment(product_id, unit_price, quantity)
    }

    /// Sets the quantity of a cart line; zero or less removes the line.
    pub fn update_quantity(&self, product_id: &str, quantity: i32) -> Result<Cart, DomainError> {
        self.store.update_quantity(product_id, quantity)
    }

    pub fn remove_item(&self, product_id: &str) -> Result<Cart, DomainError> {
        self.store.remove(product_id)
    }

    pub fn clear_cart(&self) -> Result<Cart, DomainError> {
        self.store.clear()?;
        Ok(Cart::new())
    }

    /// Submits the current cart through the checkout gateway and clears the
    /// cart on success. Checking out an empty cart is rejected.
    pub fn checkout(&self) -> Result<Uuid, DomainError> {
        let cart = self.store.load();
        if cart.is_empty() {
            return Err(DomainError::InvalidInput(
                "cannot check out an empty cart".to_string(),
            ));
        }

        let totals = compute_totals(cart.items());
        let order_id = self.checkout.submit(cart.items(), &totals)?;
        self.store.clear()?;
        info!("Order {order_id} submitted, total {}", totals.total);
        Ok(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::LineItem;
    use crate::infrastructure::memory_slot::MemorySlot;
    use bigdecimal::BigDecimal;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedCatalog(HashMap<String, BigDecimal>);

    impl FixedCatalog {
        fn with(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(id, p)| (id.to_string(), p.parse().unwrap()))
                    .collect(),
            )
        }
    }

    impl ProductCatalog for FixedCatalog {
        fn unit_price(&self, product_id: &str) -> Result<BigDecimal, DomainError> {
            self.0.get(product_id).cloned().ok_or(DomainError::NotFound)
        }
    }

    /// Gateway that records every submission.
    #[derive(Default)]
    struct RecordingGateway {
        submitted: Mutex<Vec<(Vec<LineItem>, OrderTotals)>>,
    }

    impl CheckoutGateway for &'static RecordingGateway {
        fn submit(
            &self,
            items: &[LineItem],
            totals: &OrderTotals,
        ) -> Result<Uuid, DomainError> {
            self.submitted
                .lock()
                .unwrap()
                .push((items.to_vec(), totals.clone()));
            Ok(Uuid::new_v4())
        }
    }

    struct RejectingGateway;

    impl CheckoutGateway for RejectingGateway {
        fn submit(&self, _: &[LineItem], _: &OrderTotals) -> Result<Uuid, DomainError> {
            Err(DomainError::Checkout("payment declined".to_string()))
        }
    }

    fn service_with_gateway<G: CheckoutGateway>(
        gateway: G,
    ) -> CartService<MemorySlot, FixedCatalog, G> {
        CartService::new(
            MemorySlot::new(),
            FixedCatalog::with(&[("p1", "500"), ("p2", "19.99")]),
            gateway,
        )
    }

    #[test]
    fn add_to_cart_locks_in_the_catalog_price() {
        let service = service_with_gateway(RejectingGateway);
        let cart = service.add_to_cart("p2", None).unwrap();

        assert_eq!(cart.items()[0].unit_price, "19.99".parse::<BigDecimal>().unwrap());
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn add_to_cart_of_unknown_product_is_not_found() {
        let service = service_with_gateway(RejectingGateway);
        assert!(matches!(
            service.add_to_cart("nope", Some(1)),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn add_to_cart_rejects_non_positive_quantity() {
        let service = service_with_gateway(RejectingGateway);
        assert!(matches!(
            service.add_to_cart("p1", Some(0)),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn two_adds_then_totals_matches_the_storefront_scenario() {
        let service = service_with_gateway(RejectingGateway);
        service.add_to_cart("p1", Some(1)).unwrap();
        service.add_to_cart("p1", Some(1)).unwrap();

        let cart = service.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);

        let totals = service.totals();
        assert_eq!(totals.subtotal, "1000".parse::<BigDecimal>().unwrap());
        assert_eq!(totals.tax, "50".parse::<BigDecimal>().unwrap());
        assert_eq!(totals.shipping, "0".parse::<BigDecimal>().unwrap());
        assert_eq!(totals.total, "1050".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn checkout_submits_and_clears_the_cart() {
        let gateway: &'static RecordingGateway =
            Box::leak(Box::new(RecordingGateway::default()));
        let service = service_with_gateway(gateway);
        service.add_to_cart("p1", Some(2)).unwrap();

        service.checkout().unwrap();

        let submitted = gateway.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].1.total, "1050".parse::<BigDecimal>().unwrap());
        drop(submitted);

        assert!(service.cart().is_empty());
    }

    #[test]
    fn checkout_of_an_empty_cart_is_rejected() {
        let service = service_with_gateway(RejectingGateway);
        assert!(matches!(
            service.checkout(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejected_checkout_leaves_the_cart_intact() {
        let service = service_with_gateway(RejectingGateway);
        service.add_to_cart("p1", Some(1)).unwrap();

        assert!(matches!(
            service.checkout(),
            Err(DomainError::Checkout(_))
        ));
        assert_eq!(service.cart().len(), 1);
    }
}
