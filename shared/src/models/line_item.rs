//! Order line items
//!
//! Items have no existence outside an order. Positions are dense 1-based
//! ordinals maintained by the engine; `final_price` is derived and
//! recomputed eagerly by the pricing engine, never at read time.

use crate::error::AppError;
use crate::util::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use serde::{Deserialize, Serialize};

/// A single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Dense 1-based ordinal within the order
    pub position: u32,
    /// Supplier article number
    pub article_number: String,
    /// Article name
    pub name: String,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered quantity
    pub quantity: f64,
    /// Quantity unit (pcs, kg, ...)
    pub unit: String,
    /// Currency code for the prices on this line
    pub currency: String,
    /// Supplier list price per unit
    pub list_price: f64,
    /// Discount in percent, 0..=100
    pub discount_percent: f64,
    /// Derived: list_price × (1 − discount_percent/100), rounded to 2 dp.
    /// Maintained by the pricing engine on every input change.
    pub final_price: f64,
    /// Operator override recorded against the supplier's acknowledgement;
    /// used in totals from the confirmation stage onward
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_price: Option<f64>,
    /// Per-line attestation that confirmed pricing has been reviewed;
    /// gates the Ordered → Confirmed transition
    #[serde(default)]
    pub controlling_checked: bool,
    /// Optional internal order/project/system reference (opaque here)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_info: Option<String>,
}

/// Input for creating a new line item
///
/// Position and derived fields are assigned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    pub article_number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub currency: String,
    pub list_price: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_info: Option<String>,
}

impl LineItemInput {
    /// Validate the input fields
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.article_number, "article_number", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)?;
        validate_required_text(&self.unit, "unit", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.currency, "currency", MAX_SHORT_TEXT_LEN)?;
        if self.quantity <= 0.0 {
            return Err(AppError::validation("quantity must be positive")
                .with_detail("field", "quantity"));
        }
        if self.list_price < 0.0 {
            return Err(AppError::validation("list_price must not be negative")
                .with_detail("field", "list_price"));
        }
        if !(0.0..=100.0).contains(&self.discount_percent) {
            return Err(
                AppError::validation("discount_percent must be between 0 and 100")
                    .with_detail("field", "discount_percent"),
            );
        }
        Ok(())
    }
}

/// Partial update of an existing line item
///
/// `None` leaves the field untouched. Pricing inputs flowing through here
/// trigger a final-price recomputation in the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_info: Option<Option<String>>,
}

impl LineItemPatch {
    /// Whether this patch touches a pricing input
    pub fn touches_pricing(&self) -> bool {
        self.list_price.is_some() || self.discount_percent.is_some() || self.quantity.is_some()
    }

    /// Whether this patch changes anything at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
