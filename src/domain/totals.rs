use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;

use super::cart::LineItem;

/// Tax applied to the subtotal, as a fraction.
fn tax_rate() -> BigDecimal {
    BigDecimal::from(5) / BigDecimal::from(100)
}

/// Orders at or above this subtotal ship for free.
fn free_shipping_threshold() -> BigDecimal {
    BigDecimal::from(1000)
}

/// Flat shipping fee below the free-shipping threshold.
fn flat_shipping_fee() -> BigDecimal {
    BigDecimal::from(100)
}

/// The derived subtotal/tax/shipping/total breakdown of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotals {
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

/// Computes order totals over a set of line items.
///
/// Pure: no side effects, no validation. Callers guarantee `quantity ≥ 1`
/// and `unit_price ≥ 0` on every item.
///
/// The subtotal is the exact sum of per-line subtotals. Tax is the subtotal
/// times the tax rate, rounded half-up to whole currency units. Shipping is
/// a step function on the exact subtotal, compared before any rounding. The
/// total is the exact sum of the three components, never rounded on its own,
/// so `total == subtotal + tax + shipping` always holds.
///
/// An empty cart still pays the flat shipping fee: subtotal 0, tax 0,
/// shipping 100, total 100.
pub fn compute_totals(items: &[LineItem]) -> OrderTotals {
    let subtotal: BigDecimal = items.iter().map(|i| &i.subtotal).sum();

    let tax = (&subtotal * tax_rate()).with_scale_round(0, RoundingMode::HalfUp);

    let shipping = if subtotal >= free_shipping_threshold() {
        BigDecimal::from(0)
    } else {
        flat_shipping_fee()
    };

    let total = &subtotal + &tax + &shipping;

    OrderTotals {
        subtotal,
        tax,
        shipping,
        total,
    }
}
