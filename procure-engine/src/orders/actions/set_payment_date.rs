//! Settlement (Delivered → Paid)

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::{advance, ensure_stage};
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus};

/// Record the payment date and advance to the terminal `Paid` state
#[derive(Debug, Clone)]
pub struct SetPaymentDateAction {
    pub date: NaiveDate,
}

impl CommandHandler for SetPaymentDateAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_stage(order, OrderStatus::Delivered, "set payment date")?;
        order.payment_date = Some(self.date);
        advance(order, OrderStatus::Paid);
        Ok(())
    }
}
