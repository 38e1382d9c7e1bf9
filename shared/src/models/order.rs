//! The order aggregate
//!
//! An order owns its line items and moves through a guarded lifecycle:
//! `Created → Ordered → Confirmed → Delivered → Paid`, with `Cancelled`
//! reachable from any non-terminal state. Status is never set directly;
//! it is always the derived consequence of a guarding date or flag
//! becoming present (see the engine's lifecycle module).

use super::document::{DocumentKind, DocumentSlot};
use super::line_item::LineItem;
use crate::error::AppError;
use crate::util::{MAX_SHORT_TEXT_LEN, now_millis, validate_required_text};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Being drafted
    #[default]
    Created,
    /// Sent to the supplier
    Ordered,
    /// Supplier acknowledgement recorded
    Confirmed,
    /// Goods received
    Delivered,
    /// Settled
    Paid,
    /// Abandoned before settlement
    Cancelled,
}

impl OrderStatus {
    /// Position on the linear lifecycle; `None` for `Cancelled`,
    /// which sits outside the progression
    pub fn stage(&self) -> Option<u8> {
        match self {
            Self::Created => Some(0),
            Self::Ordered => Some(1),
            Self::Confirmed => Some(2),
            Self::Delivered => Some(3),
            Self::Paid => Some(4),
            Self::Cancelled => None,
        }
    }

    /// Whether the lifecycle has reached `other` (Cancelled never compares)
    pub fn at_least(&self, other: OrderStatus) -> bool {
        match (self.stage(), other.stage()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }
}

/// How the order is placed with the supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Regular order sent to the supplier by this system
    #[default]
    Direct,
    /// Placed in the supplier's web shop; the order document is a manual
    /// upload and automatic document synthesis is disabled
    Online,
    /// Passed through from a customer order
    CustomerOrder,
}

impl OrderType {
    /// Whether the rendered order document is produced by the synthesis
    /// service (false for online orders, which carry an uploaded proof)
    pub fn synthesizes_document(&self) -> bool {
        !matches!(self, Self::Online)
    }
}

/// A procurement order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the gateway on first save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Assigned by the gateway, immutable once set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Lifecycle status, derived from the guarding dates/flags
    pub status: OrderStatus,
    pub order_type: OrderType,
    /// Selected supplier; frozen from `Confirmed` onward
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    /// User who created the order
    pub created_by: String,

    // ── Lifecycle dates (each optional until the stage is reached) ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    // ── Commercial conditions (frozen from Confirmed onward) ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_term_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instruction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    // ── Document slots ──
    #[serde(default)]
    pub offer_document: DocumentSlot,
    #[serde(default)]
    pub order_document: DocumentSlot,
    #[serde(default)]
    pub supplier_confirmation_document: DocumentSlot,

    /// Line items, positions always dense 1..=N
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Derived total over (confirmed_price ?? final_price) × quantity;
    /// maintained by the pricing engine, not independently settable
    #[serde(default)]
    pub confirmed_total: f64,

    /// Reason recorded when the order was cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    /// Creation timestamp (millis)
    pub created_at: i64,
    /// Last update timestamp (millis)
    pub updated_at: i64,
}

impl Order {
    /// Create a new draft order with zero items
    pub fn new(created_by: impl Into<String>, order_type: OrderType) -> Result<Self, AppError> {
        let created_by = created_by.into();
        validate_required_text(&created_by, "created_by", MAX_SHORT_TEXT_LEN)?;
        let now = now_millis();
        Ok(Self {
            id: None,
            order_number: None,
            status: OrderStatus::Created,
            order_type,
            supplier_id: None,
            created_by,
            order_date: None,
            confirmation_date: None,
            expected_delivery_date: None,
            delivery_date: None,
            payment_date: None,
            payment_term_id: None,
            delivery_term_id: None,
            delivery_instruction_id: None,
            comment: None,
            offer_document: DocumentSlot::Empty,
            order_document: DocumentSlot::Empty,
            supplier_confirmation_document: DocumentSlot::Empty,
            items: Vec::new(),
            confirmed_total: 0.0,
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Look up an item by its position
    pub fn item(&self, position: u32) -> Option<&LineItem> {
        self.items.iter().find(|i| i.position == position)
    }

    /// Look up an item mutably by its position
    pub fn item_mut(&mut self, position: u32) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.position == position)
    }

    /// Access a document slot by kind
    pub fn document(&self, kind: DocumentKind) -> &DocumentSlot {
        match kind {
            DocumentKind::Offer => &self.offer_document,
            DocumentKind::Order => &self.order_document,
            DocumentKind::SupplierConfirmation => &self.supplier_confirmation_document,
        }
    }

    /// Access a document slot mutably by kind
    pub fn document_mut(&mut self, kind: DocumentKind) -> &mut DocumentSlot {
        match kind {
            DocumentKind::Offer => &mut self.offer_document,
            DocumentKind::Order => &mut self.order_document,
            DocumentKind::SupplierConfirmation => &mut self.supplier_confirmation_document,
        }
    }

    /// Whether any document slot holds an upload awaiting submission
    pub fn has_pending_upload(&self) -> bool {
        self.offer_document.is_pending()
            || self.order_document.is_pending()
            || self.supplier_confirmation_document.is_pending()
    }

    /// Touch the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}
