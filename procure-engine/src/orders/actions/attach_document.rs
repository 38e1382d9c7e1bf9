//! Attach or clear order documents

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_open;
use shared::models::{DocumentKind, DocumentSlot, Order, OrderType};
use shared::util::{MAX_NAME_LEN, MAX_REFERENCE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// Put `slot` into the order's document slot of the given kind
///
/// The generated purchase-order slot is owned by the synthesis service
/// for all order types except `Online`, where the shop printout is a
/// manual upload.
#[derive(Debug, Clone)]
pub struct AttachDocumentAction {
    pub kind: DocumentKind,
    pub slot: DocumentSlot,
}

impl CommandHandler for AttachDocumentAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_open(order)?;
        if self.kind == DocumentKind::Order
            && order.order_type != OrderType::Online
            && self.slot.is_present()
        {
            return Err(OrderError::Validation(
                "order document is produced by document synthesis for this order type".into(),
            ));
        }
        match &self.slot {
            DocumentSlot::Empty => {}
            DocumentSlot::Stored { reference } => {
                validate_required_text(reference, "reference", MAX_REFERENCE_LEN)?;
            }
            DocumentSlot::PendingUpload {
                file_name,
                content_type,
                data,
            } => {
                validate_required_text(file_name, "file_name", MAX_NAME_LEN)?;
                validate_required_text(content_type, "content_type", MAX_SHORT_TEXT_LEN)?;
                if data.is_empty() {
                    return Err(OrderError::Validation("uploaded file is empty".into()));
                }
            }
        }
        *order.document_mut(self.kind) = self.slot.clone();
        Ok(())
    }
}
