//! Goods receipt (Confirmed → Delivered) and the forecast date

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::{advance, ensure_open, ensure_stage};
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus};

/// Record the actual delivery date and advance to `Delivered`
#[derive(Debug, Clone)]
pub struct SetDeliveryDateAction {
    pub date: NaiveDate,
}

impl CommandHandler for SetDeliveryDateAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_stage(order, OrderStatus::Confirmed, "set delivery date")?;
        order.delivery_date = Some(self.date);
        advance(order, OrderStatus::Delivered);
        Ok(())
    }
}

/// Set or clear the expected delivery date
///
/// A forecast, not a lifecycle guard: writable on any open order and
/// never moves the status.
#[derive(Debug, Clone)]
pub struct SetExpectedDeliveryDateAction {
    pub date: Option<NaiveDate>,
}

impl CommandHandler for SetExpectedDeliveryDateAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_open(order)?;
        order.expected_delivery_date = self.date;
        Ok(())
    }
}
