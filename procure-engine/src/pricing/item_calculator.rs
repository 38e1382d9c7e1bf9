//! Line item price calculator
//!
//! A line's `final_price` is `list_price × (1 − discount_percent/100)`,
//! rounded to 2 decimal places. It is recomputed after every change to
//! either input. From the confirmation stage onward an operator-entered
//! `confirmed_price` overrides it in total computations.

use rust_decimal::prelude::*;
use shared::models::{LineItem, OrderStatus};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

// ==================== Derived Price ====================

/// Recompute `final_price` from `list_price` and `discount_percent`.
///
/// Must be invoked after every change to either input; callers never
/// derive the price lazily at read time.
pub fn recompute_final_price(item: &mut LineItem) {
    let list = to_decimal(item.list_price);
    let discount = to_decimal(item.discount_percent);
    let factor = Decimal::ONE - discount / Decimal::ONE_HUNDRED;
    item.final_price = to_f64(list * factor);
}

/// Unit price effective at the given lifecycle stage.
///
/// The operator's `confirmed_price` takes over once the order has entered
/// the confirmation stage (status `Ordered` or later); before that the
/// derived `final_price` is authoritative.
fn effective_unit_price(item: &LineItem, status: OrderStatus) -> f64 {
    if status.at_least(OrderStatus::Ordered) {
        item.confirmed_price.unwrap_or(item.final_price)
    } else {
        item.final_price
    }
}

/// Line total: effective unit price × quantity, rounded to 2 dp
pub fn line_total(item: &LineItem, status: OrderStatus) -> f64 {
    let unit = to_decimal(effective_unit_price(item, status));
    to_f64(unit * to_decimal(item.quantity))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::LineItem;

    fn item(list_price: f64, discount_percent: f64, quantity: f64) -> LineItem {
        LineItem {
            position: 1,
            article_number: "A-1".into(),
            name: "Test article".into(),
            description: None,
            quantity,
            unit: "pcs".into(),
            currency: "EUR".into(),
            list_price,
            discount_percent,
            final_price: 0.0,
            confirmed_price: None,
            controlling_checked: false,
            management_info: None,
        }
    }

    #[test]
    fn test_final_price_simple() {
        let mut i = item(100.0, 10.0, 1.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 90.0);
    }

    #[test]
    fn test_final_price_no_discount() {
        let mut i = item(50.0, 0.0, 2.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 50.0);
    }

    #[test]
    fn test_final_price_full_discount() {
        let mut i = item(80.0, 100.0, 1.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 0.0);
    }

    #[test]
    fn test_final_price_rounds_half_up() {
        // 99.99 × (1 − 0.335) = 66.49335 → 66.49
        let mut i = item(99.99, 33.5, 1.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 66.49);

        // 10.05 × 0.5 = 5.025 → 5.03 (midpoint away from zero)
        let mut i = item(10.05, 50.0, 1.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 5.03);
    }

    #[test]
    fn test_recompute_is_not_stale() {
        let mut i = item(100.0, 10.0, 1.0);
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 90.0);
        i.discount_percent = 20.0;
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 80.0);
        i.list_price = 50.0;
        recompute_final_price(&mut i);
        assert_eq!(i.final_price, 40.0);
    }

    #[test]
    fn test_line_total_before_confirmation_stage() {
        let mut i = item(100.0, 10.0, 3.0);
        recompute_final_price(&mut i);
        i.confirmed_price = Some(85.0);
        // Draft stage: the override is not in effect yet
        assert_eq!(line_total(&i, OrderStatus::Created), 270.0);
    }

    #[test]
    fn test_line_total_uses_override_from_confirmation_stage() {
        let mut i = item(100.0, 10.0, 3.0);
        recompute_final_price(&mut i);
        i.confirmed_price = Some(85.0);
        assert_eq!(line_total(&i, OrderStatus::Ordered), 255.0);
        assert_eq!(line_total(&i, OrderStatus::Confirmed), 255.0);
        assert_eq!(line_total(&i, OrderStatus::Delivered), 255.0);
    }

    #[test]
    fn test_line_total_falls_back_to_final_price() {
        let mut i = item(100.0, 10.0, 2.0);
        recompute_final_price(&mut i);
        assert_eq!(line_total(&i, OrderStatus::Confirmed), 180.0);
    }
}
