//! Data model for the procurement order system
//!
//! The order aggregate and the catalog records it references. Catalog
//! entities (suppliers, terms, instructions, users) are owned by the
//! external gateway; only their read shapes live here.

mod catalog;
mod document;
mod line_item;
mod order;
mod payment_term;
mod transfer;

pub use catalog::{DeliveryInstruction, DeliveryTerm, Supplier, UserRef};
pub use document::{DocumentKind, DocumentSlot};
pub use line_item::{LineItem, LineItemInput, LineItemPatch};
pub use order::{Order, OrderStatus, OrderType};
pub use payment_term::PaymentTerm;
pub use transfer::{TransferOutcome, TransferReport};
