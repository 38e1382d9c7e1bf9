//! Append a line item

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_unlocked;
use crate::pricing::recompute_final_price;
use shared::models::{LineItem, LineItemInput, Order};

/// Append a new item at the next free position
#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub input: LineItemInput,
}

impl CommandHandler for AddItemAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_unlocked(order, "items")?;
        if order.supplier_id.is_none() {
            return Err(OrderError::SupplierRequired);
        }
        self.input.validate()?;

        let mut item = LineItem {
            position: order.items.len() as u32 + 1,
            article_number: self.input.article_number.clone(),
            name: self.input.name.clone(),
            description: self.input.description.clone(),
            quantity: self.input.quantity,
            unit: self.input.unit.clone(),
            currency: self.input.currency.clone(),
            list_price: self.input.list_price,
            discount_percent: self.input.discount_percent,
            final_price: 0.0,
            confirmed_price: None,
            controlling_checked: false,
            management_info: self.input.management_info.clone(),
        };
        recompute_final_price(&mut item);
        order.items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderStatus, OrderType};

    fn input() -> LineItemInput {
        LineItemInput {
            article_number: "A-100".into(),
            name: "Hex bolts M8".into(),
            description: None,
            quantity: 1.0,
            unit: "pcs".into(),
            currency: "EUR".into(),
            list_price: 100.0,
            discount_percent: 10.0,
            management_info: None,
        }
    }

    fn draft() -> Order {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.supplier_id = Some("s-1".into());
        order
    }

    #[test]
    fn test_appends_with_derived_price_and_position() {
        let mut order = draft();
        AddItemAction { input: input() }.apply(&mut order).unwrap();
        AddItemAction { input: input() }.apply(&mut order).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].position, 1);
        assert_eq!(order.items[1].position, 2);
        // 100 at 10% discount
        assert_eq!(order.items[0].final_price, 90.0);
    }

    #[test]
    fn test_requires_supplier() {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        assert_eq!(
            AddItemAction { input: input() }.apply(&mut order),
            Err(OrderError::SupplierRequired)
        );
    }

    #[test]
    fn test_items_frozen_after_confirmation() {
        let mut order = draft();
        order.status = OrderStatus::Confirmed;
        assert_eq!(
            AddItemAction { input: input() }.apply(&mut order),
            Err(OrderError::PrecisionLocked { field: "items" })
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut order = draft();
        let mut bad = input();
        bad.quantity = -1.0;
        assert!(AddItemAction { input: bad }.apply(&mut order).is_err());
        assert!(order.items.is_empty());
    }
}
