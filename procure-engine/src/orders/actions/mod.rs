//! Command actions
//!
//! One file per action. Each action carries its own input, validates the
//! guards it depends on and mutates the draft order handed to it by
//! [`execute`](crate::orders::execute); derived pricing is recomputed by
//! the executor after the action succeeds.

// ==================== Action Modules ====================

mod add_item;
mod attach_document;
mod cancel_order;
mod modify_item;
mod remove_item;
mod select_supplier;
mod set_confirmation_date;
mod set_confirmed_price;
mod set_controlling_check;
mod set_delivery_date;
mod set_order_date;
mod set_payment_date;
mod update_conditions;

// ==================== Re-exports ====================

pub use add_item::AddItemAction;
pub use attach_document::AttachDocumentAction;
pub use cancel_order::CancelOrderAction;
pub use modify_item::ModifyItemAction;
pub use remove_item::RemoveItemAction;
pub use select_supplier::SelectSupplierAction;
pub use set_confirmation_date::SetConfirmationDateAction;
pub use set_confirmed_price::SetConfirmedPriceAction;
pub use set_controlling_check::SetControllingCheckAction;
pub use set_delivery_date::{SetDeliveryDateAction, SetExpectedDeliveryDateAction};
pub use set_order_date::SetOrderDateAction;
pub use set_payment_date::SetPaymentDateAction;
pub use update_conditions::UpdateConditionsAction;

use crate::error::OrderError;
use enum_dispatch::enum_dispatch;
use shared::models::Order;

/// Behaviour shared by every command action
#[enum_dispatch]
pub trait CommandHandler {
    /// Validate guards and mutate the draft order
    fn apply(&self, order: &mut Order) -> Result<(), OrderError>;
}

/// All commands an order accepts
#[enum_dispatch(CommandHandler)]
#[derive(Debug, Clone)]
pub enum CommandAction {
    SelectSupplier(SelectSupplierAction),
    AddItem(AddItemAction),
    RemoveItem(RemoveItemAction),
    ModifyItem(ModifyItemAction),
    SetConfirmedPrice(SetConfirmedPriceAction),
    SetControllingCheck(SetControllingCheckAction),
    UpdateConditions(UpdateConditionsAction),
    AttachDocument(AttachDocumentAction),
    SetOrderDate(SetOrderDateAction),
    SetConfirmationDate(SetConfirmationDateAction),
    SetExpectedDeliveryDate(SetExpectedDeliveryDateAction),
    SetDeliveryDate(SetDeliveryDateAction),
    SetPaymentDate(SetPaymentDateAction),
    CancelOrder(CancelOrderAction),
}
