//! Select or change the supplier

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_unlocked;
use shared::models::Order;
use shared::util::{MAX_SHORT_TEXT_LEN, validate_required_text};

/// Set the order's supplier reference
#[derive(Debug, Clone)]
pub struct SelectSupplierAction {
    pub supplier_id: String,
}

impl CommandHandler for SelectSupplierAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_unlocked(order, "supplier_id")?;
        validate_required_text(&self.supplier_id, "supplier_id", MAX_SHORT_TEXT_LEN)?;
        order.supplier_id = Some(self.supplier_id.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderStatus, OrderType};

    #[test]
    fn test_select_supplier() {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        let action = SelectSupplierAction {
            supplier_id: "s-42".into(),
        };
        action.apply(&mut order).unwrap();
        assert_eq!(order.supplier_id.as_deref(), Some("s-42"));
    }

    #[test]
    fn test_supplier_frozen_after_confirmation() {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        order.status = OrderStatus::Confirmed;
        let action = SelectSupplierAction {
            supplier_id: "s-42".into(),
        };
        assert_eq!(
            action.apply(&mut order),
            Err(OrderError::PrecisionLocked {
                field: "supplier_id"
            })
        );
    }

    #[test]
    fn test_rejects_blank_supplier() {
        let mut order = Order::new("u-1", OrderType::Direct).unwrap();
        let action = SelectSupplierAction {
            supplier_id: "  ".into(),
        };
        assert!(matches!(
            action.apply(&mut order),
            Err(OrderError::Validation(_))
        ));
    }
}
