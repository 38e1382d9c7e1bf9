//! Lifecycle guards and frozen-field rules
//!
//! Status is never assigned directly by callers: every transition is the
//! consequence of a guarding date or flag becoming present, evaluated by
//! the date-setting command actions. This module holds the checks those
//! actions share.
//!
//! Mutability is coupled to status: from `Confirmed` onward the supplier
//! reference, the item list and the commercial conditions are read-only.
//! Per-item `controlling_checked` and `confirmed_price` stay writable
//! through the confirmation stage so the Ordered → Confirmed guard can be
//! satisfied.

use crate::error::OrderError;
use shared::models::{Order, OrderStatus};

/// Reject any mutation of a terminal (paid or cancelled) order
pub fn ensure_open(order: &Order) -> Result<(), OrderError> {
    if order.status.is_terminal() {
        return Err(OrderError::OrderClosed(order.status));
    }
    Ok(())
}

/// Whether the commercial core of the order is frozen
/// (supplier, items, conditions; from `Confirmed` onward)
pub fn is_frozen(order: &Order) -> bool {
    order.status.at_least(OrderStatus::Confirmed)
}

/// Reject mutation of a field that freezes at `Confirmed`
pub fn ensure_unlocked(order: &Order, field: &'static str) -> Result<(), OrderError> {
    ensure_open(order)?;
    if is_frozen(order) {
        return Err(OrderError::PrecisionLocked { field });
    }
    Ok(())
}

/// Reject mutation of the per-item confirmation fields once the
/// confirmation stage is over (`Delivered` onward)
pub fn ensure_confirmation_stage(order: &Order, field: &'static str) -> Result<(), OrderError> {
    ensure_open(order)?;
    if order.status.at_least(OrderStatus::Delivered) {
        return Err(OrderError::PrecisionLocked { field });
    }
    Ok(())
}

/// Require the order to be exactly in `expected` for a guarded transition
pub fn ensure_stage(
    order: &Order,
    expected: OrderStatus,
    attempted: &'static str,
) -> Result<(), OrderError> {
    ensure_open(order)?;
    if order.status != expected {
        return Err(OrderError::InvalidTransition {
            status: order.status,
            attempted,
        });
    }
    Ok(())
}

/// Positions of items still missing their controlling check
pub fn unchecked_positions(order: &Order) -> Vec<u32> {
    order
        .items
        .iter()
        .filter(|item| !item.controlling_checked)
        .map(|item| item.position)
        .collect()
}

/// Record a guard-driven status change
pub fn advance(order: &mut Order, to: OrderStatus) {
    let from = order.status;
    order.status = to;
    tracing::info!(
        order_id = ?order.id,
        from = ?from,
        to = ?to,
        "Order status advanced"
    );
}
