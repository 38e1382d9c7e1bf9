//! Record a confirmed unit price

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_confirmation_stage;
use shared::models::Order;

/// Set or clear the supplier-confirmed unit price of an item
///
/// Stays writable through `Confirmed` (so late acknowledgement
/// corrections are possible), locked from `Delivered` onward.
#[derive(Debug, Clone)]
pub struct SetConfirmedPriceAction {
    pub position: u32,
    pub price: Option<f64>,
}

impl CommandHandler for SetConfirmedPriceAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_confirmation_stage(order, "confirmed_price")?;
        if matches!(self.price, Some(p) if p < 0.0) {
            return Err(OrderError::Validation(
                "confirmed_price must not be negative".into(),
            ));
        }
        let item = order
            .item_mut(self.position)
            .ok_or(OrderError::ItemNotFound(self.position))?;
        item.confirmed_price = self.price;
        Ok(())
    }
}
