//! Section gate
//!
//! Derives which logical sections of the order are currently enterable
//! from the status, the supplier selection and the item list. The policy
//! mirrors the transition guards: sections feeding the frozen commercial
//! core close at `Confirmed`, the stage-recording sections open as their
//! stage is reached. A cancelled order is read-only everywhere.

use shared::models::{Order, OrderStatus};

/// Accessibility of the order's logical sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAccess {
    /// Supplier selection and offer document
    pub supplier: bool,
    /// Line items (add/remove/re-price)
    pub items: bool,
    /// Commercial conditions and free-text comment
    pub conditions: bool,
    /// Order date / finalize & (re-)export
    pub finalize: bool,
    /// Supplier acknowledgement: confirmation date, controlling checks,
    /// confirmed prices
    pub confirmation: bool,
    /// Goods receipt
    pub delivery: bool,
    /// Settlement
    pub payment: bool,
}

/// Compute the section gate for the order's current state
pub fn section_access(order: &Order) -> SectionAccess {
    let status = order.status;
    if status == OrderStatus::Cancelled {
        return SectionAccess {
            supplier: false,
            items: false,
            conditions: false,
            finalize: false,
            confirmation: false,
            delivery: false,
            payment: false,
        };
    }

    let has_supplier = order.supplier_id.is_some();
    let has_items = !order.items.is_empty();
    let frozen = status.at_least(OrderStatus::Confirmed);

    SectionAccess {
        supplier: !frozen,
        items: has_supplier && !frozen,
        conditions: has_items && !frozen,
        // Stays enterable at any reached status to allow re-exporting
        finalize: has_supplier && has_items,
        confirmation: status.at_least(OrderStatus::Ordered),
        delivery: status.at_least(OrderStatus::Confirmed),
        payment: status.at_least(OrderStatus::Delivered),
    }
}
