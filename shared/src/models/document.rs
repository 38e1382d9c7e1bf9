//! Document slots on an order
//!
//! Each order carries three document slots. A slot is either empty, a
//! reference to a file already stored behind the gateway, or a pending
//! local upload that has not been submitted yet. Pending uploads are
//! submitted as multipart attachments on the next save; stored references
//! pass through as plain strings.

use serde::{Deserialize, Serialize};

/// The three logical document slots of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Supplier's offer the order was created from
    Offer,
    /// The generated (or, for online orders, uploaded) purchase order
    Order,
    /// The supplier's order acknowledgement
    SupplierConfirmation,
}

impl DocumentKind {
    /// Gateway field name for this slot
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Offer => "offer_document",
            Self::Order => "order_document",
            Self::SupplierConfirmation => "supplier_confirmation_document",
        }
    }
}

/// State of a single document slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DocumentSlot {
    /// No document present
    #[default]
    Empty,
    /// Reference to a file already stored behind the gateway
    Stored { reference: String },
    /// Local upload awaiting submission; `data` never leaves the process
    /// as JSON, it is attached as a multipart part on save
    PendingUpload {
        file_name: String,
        content_type: String,
        #[serde(default, skip_serializing)]
        data: Vec<u8>,
    },
}

impl DocumentSlot {
    /// Create a pending upload slot
    pub fn pending(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self::PendingUpload {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Whether this slot holds an upload awaiting submission
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingUpload { .. })
    }

    /// Whether any document (stored or pending) is present
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_states() {
        assert!(!DocumentSlot::Empty.is_present());
        let stored = DocumentSlot::Stored {
            reference: "files/po-1.pdf".into(),
        };
        assert!(stored.is_present());
        assert!(!stored.is_pending());
        let pending = DocumentSlot::pending("ack.pdf", "application/pdf", vec![1, 2]);
        assert!(pending.is_pending());
    }

    #[test]
    fn test_pending_data_not_serialized() {
        let pending = DocumentSlot::pending("ack.pdf", "application/pdf", vec![1, 2, 3]);
        let json = serde_json::to_string(&pending).unwrap();
        assert!(!json.contains("data"));
        assert!(json.contains("ack.pdf"));
    }
}
