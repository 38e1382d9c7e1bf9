//! Per-item controlling attestation

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_confirmation_stage;
use shared::models::Order;

/// Mark an item's confirmed pricing as reviewed (or revoke the mark)
///
/// Every item must carry the mark before the confirmation date can be
/// recorded.
#[derive(Debug, Clone)]
pub struct SetControllingCheckAction {
    pub position: u32,
    pub checked: bool,
}

impl CommandHandler for SetControllingCheckAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_confirmation_stage(order, "controlling_checked")?;
        let item = order
            .item_mut(self.position)
            .ok_or(OrderError::ItemNotFound(self.position))?;
        item.controlling_checked = self.checked;
        Ok(())
    }
}
