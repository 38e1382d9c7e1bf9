//! Cancel an order

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::{advance, ensure_open};
use shared::models::{Order, OrderStatus};
use shared::util::{MAX_NOTE_LEN, validate_optional_text};

/// Abandon the order from any non-terminal state
///
/// Terminal itself: a cancelled order accepts no further commands.
#[derive(Debug, Clone, Default)]
pub struct CancelOrderAction {
    pub reason: Option<String>,
}

impl CommandHandler for CancelOrderAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_open(order)?;
        validate_optional_text(&self.reason, "cancel_reason", MAX_NOTE_LEN)?;
        order.cancel_reason = self.reason.clone();
        advance(order, OrderStatus::Cancelled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderType;

    fn order_in(status: OrderStatus) -> Order {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.status = status;
        order
    }

    #[test]
    fn test_cancel_from_any_open_state() {
        for status in [
            OrderStatus::Created,
            OrderStatus::Ordered,
            OrderStatus::Confirmed,
            OrderStatus::Delivered,
        ] {
            let mut order = order_in(status);
            CancelOrderAction {
                reason: Some("supplier discontinued the article".into()),
            }
            .apply(&mut order)
            .unwrap();
            assert_eq!(order.status, OrderStatus::Cancelled);
            assert!(order.cancel_reason.is_some());
        }
    }

    #[test]
    fn test_terminal_orders_cannot_be_cancelled() {
        let mut order = order_in(OrderStatus::Paid);
        assert_eq!(
            CancelOrderAction::default().apply(&mut order),
            Err(OrderError::OrderClosed(OrderStatus::Paid))
        );

        let mut order = order_in(OrderStatus::Cancelled);
        assert_eq!(
            CancelOrderAction::default().apply(&mut order),
            Err(OrderError::OrderClosed(OrderStatus::Cancelled))
        );
    }

    #[test]
    fn test_reason_is_optional() {
        let mut order = order_in(OrderStatus::Created);
        CancelOrderAction::default().apply(&mut order).unwrap();
        assert!(order.cancel_reason.is_none());
    }
}
