//! Record the supplier acknowledgement (Ordered → Confirmed)

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::{advance, ensure_stage, unchecked_positions};
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus};

/// Record the confirmation date and advance to `Confirmed`
///
/// Every item must carry its controlling check; the error lists the
/// positions still missing one. From `Confirmed` onward the commercial
/// core of the order is frozen.
#[derive(Debug, Clone)]
pub struct SetConfirmationDateAction {
    pub date: NaiveDate,
}

impl CommandHandler for SetConfirmationDateAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_stage(order, OrderStatus::Ordered, "set confirmation date")?;
        let unchecked = unchecked_positions(order);
        if !unchecked.is_empty() {
            return Err(OrderError::UncheckedItems {
                positions: unchecked,
            });
        }
        order.confirmation_date = Some(self.date);
        advance(order, OrderStatus::Confirmed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::recompute_final_price;
    use shared::models::{LineItem, OrderType};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn item(position: u32, checked: bool) -> LineItem {
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
            controlling_checked: checked,
            management_info: None,
        };
        recompute_final_price(&mut item);
        item
    }

    fn ordered(items: Vec<LineItem>) -> Order {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.supplier_id = Some("s-1".into());
        order.items = items;
        order.status = OrderStatus::Ordered;
        order
    }

    #[test]
    fn test_advances_when_all_checked() {
        let mut order = ordered(vec![item(1, true), item(2, true)]);
        SetConfirmationDateAction { date: date() }
            .apply(&mut order)
            .unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.confirmation_date, Some(date()));
    }

    #[test]
    fn test_lists_unchecked_positions() {
        let mut order = ordered(vec![item(1, true), item(2, false), item(3, false)]);
        assert_eq!(
            SetConfirmationDateAction { date: date() }.apply(&mut order),
            Err(OrderError::UncheckedItems {
                positions: vec![2, 3]
            })
        );
        assert_eq!(order.status, OrderStatus::Ordered);
        assert!(order.confirmation_date.is_none());
    }

    #[test]
    fn test_only_from_ordered() {
        let mut order = ordered(vec![item(1, true)]);
        order.status = OrderStatus::Created;
        assert!(matches!(
            SetConfirmationDateAction { date: date() }.apply(&mut order),
            Err(OrderError::InvalidTransition { .. })
        ));
    }
}
