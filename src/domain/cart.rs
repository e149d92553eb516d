use bigdecimal::BigDecimal;

/// One product entry in a cart, with its quantity and locked-in unit price.
///
/// `subtotal` is derived from `unit_price × quantity` and is re-derived by
/// every `Cart` mutation; it is never mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, quantity: i32, unit_price: BigDecimal) -> Self {
        let subtotal = &unit_price * BigDecimal::from(quantity);
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
            subtotal,
        }
    }

    fn rederive_subtotal(&mut self) {
        self.subtotal = &self.unit_price * BigDecimal::from(self.quantity);
    }
}

/// The in-progress cart: an ordered sequence of line items, unique per
/// `product_id`. Insertion order is preserved across mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds `quantity` of a product. Re-adding a product already in the cart
    /// increments its quantity; the unit price of the first add is kept, a
    /// later add never overwrites it.
    pub fn add_or_increment(&mut self, product_id: &str, unit_price: BigDecimal, quantity: i32) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity += quantity;
                item.rederive_subtotal();
            }
            None => self
                .items
                .push(LineItem::new(product_id, quantity, unit_price)),
        }
    }

    /// Sets the quantity of an existing line. A quantity of zero or less
    /// removes the line entirely. Unknown products are left untouched.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            item.rederive_subtotal();
        }
    }

    /// Removes a line. Removing a product that is not present is a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }
}
