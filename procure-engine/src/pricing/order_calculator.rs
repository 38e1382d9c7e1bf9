//! Order-level totals and position upkeep
//!
//! Positions form a dense 1-based sequence at all times: appends take
//! `len + 1`, removals renumber the remainder in the same operation.

use super::item_calculator::{line_total, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::{LineItem, Order, OrderStatus};

/// Sum of line totals at the given lifecycle stage
pub fn order_total(items: &[LineItem], status: OrderStatus) -> f64 {
    let sum = items
        .iter()
        .map(|item| to_decimal(line_total(item, status)))
        .sum::<Decimal>();
    to_f64(sum)
}

/// Recompute the order's derived total from its items
pub fn recalculate_totals(order: &mut Order) {
    order.confirmed_total = order_total(&order.items, order.status);
}

/// Restore the dense 1..=N position sequence after a structural change
pub fn renumber(items: &mut [LineItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.position = index as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::recompute_final_price;

    fn item(position: u32, list_price: f64, discount_percent: f64, quantity: f64) -> LineItem {
        let mut item = LineItem {
            position,
            article_number: format!("A-{position}"),
            name: format!("Article {position}"),
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
        };
        recompute_final_price(&mut item);
        item
    }

    #[test]
    fn test_order_total() {
        // 100 at 10% → 90 × 1, plus 50 at 0% → 50 × 2 = 190
        let items = vec![item(1, 100.0, 10.0, 1.0), item(2, 50.0, 0.0, 2.0)];
        assert_eq!(order_total(&items, OrderStatus::Created), 190.0);
    }

    #[test]
    fn test_order_total_with_confirmed_overrides() {
        let mut items = vec![item(1, 100.0, 10.0, 1.0), item(2, 50.0, 0.0, 2.0)];
        items[0].confirmed_price = Some(88.0);
        // Override only counts from the confirmation stage
        assert_eq!(order_total(&items, OrderStatus::Created), 190.0);
        assert_eq!(order_total(&items, OrderStatus::Confirmed), 188.0);
    }

    #[test]
    fn test_order_total_empty() {
        assert_eq!(order_total(&[], OrderStatus::Created), 0.0);
    }

    #[test]
    fn test_renumber_closes_gaps() {
        let mut items = vec![
            item(1, 10.0, 0.0, 1.0),
            item(3, 10.0, 0.0, 1.0),
            item(7, 10.0, 0.0, 1.0),
        ];
        renumber(&mut items);
        let positions: Vec<u32> = items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_positions_dense_after_arbitrary_removals() {
        let mut items: Vec<LineItem> = (1..=5).map(|p| item(p, 10.0, 0.0, 1.0)).collect();
        items.remove(2);
        renumber(&mut items);
        assert_eq!(
            items.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        items.remove(0);
        renumber(&mut items);
        assert_eq!(
            items.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
