//! Catalog reference records
//!
//! Read-only shapes for the catalog entities the order references.
//! Their CRUD lives entirely behind the gateway.

use serde::{Deserialize, Serialize};

/// A supplier the order may be placed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Delivery term (Incoterm-style)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTerm {
    pub id: String,
    pub name: String,
}

/// Delivery instruction (free-text shipping handling note)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInstruction {
    pub id: String,
    pub name: String,
}

/// Reference to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}
