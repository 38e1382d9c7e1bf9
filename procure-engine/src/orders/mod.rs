//! Order command processing
//!
//! Callers never mutate an [`Order`] directly: every edit is a command
//! action validated and applied by this module.
//!
//! # Command Flow
//!
//! ```text
//! execute(order, action)
//!     ├─ 1. Clone the order into a draft
//!     ├─ 2. Action validates guards and mutates the draft
//!     ├─ 3. Pricing engine recomputes derived totals
//!     ├─ 4. Draft replaces the order (commit)
//!     └─ On error: order untouched, no partial write
//! ```
//!
//! Lifecycle transitions happen inside the date-setting actions; status
//! is always a derived consequence of the guarding date or flag.

pub mod actions;

pub use actions::{CommandAction, CommandHandler};

use crate::error::OrderError;
use crate::pricing;
use shared::models::Order;

/// Execute a command against the order.
///
/// Applies the action to a draft copy first; the order is only replaced
/// when the whole command succeeded, so a failed command never leaves a
/// partial write behind.
pub fn execute(order: &mut Order, action: CommandAction) -> Result<(), OrderError> {
    tracing::debug!(order_id = ?order.id, action = ?action, "Executing order command");

    let mut draft = order.clone();
    if let Err(err) = action.apply(&mut draft) {
        tracing::warn!(order_id = ?order.id, error = %err, "Order command rejected");
        return Err(err);
    }
    pricing::recalculate_totals(&mut draft);
    draft.touch();
    *order = draft;
    Ok(())
}
