//! Remove a line item

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_unlocked;
use crate::pricing::renumber;
use shared::models::Order;

/// Remove the item at `position` and close the gap
#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub position: u32,
}

impl CommandHandler for RemoveItemAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_unlocked(order, "items")?;
        let index = order
            .items
            .iter()
            .position(|item| item.position == self.position)
            .ok_or(OrderError::ItemNotFound(self.position))?;
        order.items.remove(index);
        renumber(&mut order.items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::recompute_final_price;
    use shared::models::{LineItem, OrderStatus, OrderType};

    fn item(position: u32) -> LineItem {
        let mut item = LineItem {
            position,
            article_number: format!("A-{position}"),
            name: format!("Article {position}"),
            description: None,
            quantity: 1.0,
            unit: "pcs".into(),
            currency: "EUR".into(),
            list_price: 10.0,
            discount_percent: 0.0,
            final_price: 0.0,
            confirmed_price: None,
            controlling_checked: false,
            management_info: None,
        };
        recompute_final_price(&mut item);
        item
    }

    fn order_with_items(count: u32) -> Order {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.supplier_id = Some("s-1".into());
        order.items = (1..=count).map(item).collect();
        order
    }

    #[test]
    fn test_remove_renumbers_in_one_step() {
        let mut order = order_with_items(3);
        RemoveItemAction { position: 2 }.apply(&mut order).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(
            order.items.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![1, 2]
        );
        // The survivor formerly at position 3 moved up
        assert_eq!(order.items[1].article_number, "A-3");
    }

    #[test]
    fn test_unknown_position() {
        let mut order = order_with_items(2);
        assert_eq!(
            RemoveItemAction { position: 9 }.apply(&mut order),
            Err(OrderError::ItemNotFound(9))
        );
    }

    #[test]
    fn test_items_frozen_after_confirmation() {
        let mut order = order_with_items(2);
        order.status = OrderStatus::Confirmed;
        assert_eq!(
            RemoveItemAction { position: 1 }.apply(&mut order),
            Err(OrderError::PrecisionLocked { field: "items" })
        );
    }
}
