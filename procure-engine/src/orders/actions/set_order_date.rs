//! Finalize the order (Created → Ordered)

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::{advance, ensure_stage};
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus};

/// Record the order date and advance to `Ordered`
///
/// Requires a draft with a supplier and at least one item; the guard
/// failing leaves both the date and the status untouched.
#[derive(Debug, Clone)]
pub struct SetOrderDateAction {
    pub date: NaiveDate,
}

impl CommandHandler for SetOrderDateAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_stage(order, OrderStatus::Created, "set order date")?;
        if order.supplier_id.is_none() {
            return Err(OrderError::SupplierRequired);
        }
        if order.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        order.order_date = Some(self.date);
        advance(order, OrderStatus::Ordered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::recompute_final_price;
    use shared::models::{LineItem, OrderType};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn ready_order() -> Order {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.supplier_id = Some("s-1".into());
        let mut item = LineItem {
            position: 1,
            article_number: "A-1".into(),
            name: "Article".into(),
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
        order.items.push(item);
        order
    }

    #[test]
    fn test_advances_to_ordered() {
        let mut order = ready_order();
        SetOrderDateAction { date: date() }.apply(&mut order).unwrap();
        assert_eq!(order.status, OrderStatus::Ordered);
        assert_eq!(order.order_date, Some(date()));
    }

    #[test]
    fn test_requires_supplier_and_items() {
        let mut order = ready_order();
        order.supplier_id = None;
        assert_eq!(
            SetOrderDateAction { date: date() }.apply(&mut order),
            Err(OrderError::SupplierRequired)
        );
        assert_eq!(order.status, OrderStatus::Created);

        let mut order = ready_order();
        order.items.clear();
        assert_eq!(
            SetOrderDateAction { date: date() }.apply(&mut order),
            Err(OrderError::ItemsRequired)
        );
        assert!(order.order_date.is_none());
    }

    #[test]
    fn test_only_from_created() {
        let mut order = ready_order();
        order.status = OrderStatus::Ordered;
        assert_eq!(
            SetOrderDateAction { date: date() }.apply(&mut order),
            Err(OrderError::InvalidTransition {
                status: OrderStatus::Ordered,
                attempted: "set order date",
            })
        );
    }
}
