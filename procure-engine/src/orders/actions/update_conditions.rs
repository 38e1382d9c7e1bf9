//! Commercial conditions and comment

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_unlocked;
use shared::models::Order;
use shared::util::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text};

/// Update the order's payment/delivery condition references and the
/// free-text comment
///
/// `None` leaves a field untouched; the inner `Option` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateConditionsAction {
    pub payment_term_id: Option<Option<String>>,
    pub delivery_term_id: Option<Option<String>>,
    pub delivery_instruction_id: Option<Option<String>>,
    pub comment: Option<Option<String>>,
}

impl CommandHandler for UpdateConditionsAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_unlocked(order, "conditions")?;
        if order.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        if let Some(payment_term_id) = &self.payment_term_id {
            validate_optional_text(payment_term_id, "payment_term_id", MAX_SHORT_TEXT_LEN)?;
            order.payment_term_id = payment_term_id.clone();
        }
        if let Some(delivery_term_id) = &self.delivery_term_id {
            validate_optional_text(delivery_term_id, "delivery_term_id", MAX_SHORT_TEXT_LEN)?;
            order.delivery_term_id = delivery_term_id.clone();
        }
        if let Some(delivery_instruction_id) = &self.delivery_instruction_id {
            validate_optional_text(
                delivery_instruction_id,
                "delivery_instruction_id",
                MAX_SHORT_TEXT_LEN,
            )?;
            order.delivery_instruction_id = delivery_instruction_id.clone();
        }
        if let Some(comment) = &self.comment {
            validate_optional_text(comment, "comment", MAX_NOTE_LEN)?;
            order.comment = comment.clone();
        }
        Ok(())
    }
}
