//! Payment terms
//!
//! Owned by the catalog gateway; the order only references them by id.
//! A term is either standard (net days + cash discount), a prepayment,
//! or a custom three-way split. The split percentages must sum to 100;
//! the engine's payment split validator enforces the tolerance.

use serde::{Deserialize, Serialize};

/// A payment term as served by the catalog gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,

    /// Payment due in full before delivery; mutually exclusive with
    /// `has_custom_terms`
    #[serde(default)]
    pub is_prepayment: bool,
    /// Three-way weighted split; mutually exclusive with `is_prepayment`
    #[serde(default)]
    pub has_custom_terms: bool,

    // ── Standard mode ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,

    // ── Custom mode: three weighted components ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_payment_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_payment_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_payment_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_payment_description: Option<String>,
}

impl PaymentTerm {
    /// Enable or disable prepayment; enabling clears custom terms
    /// (the two flags are mutually exclusive, last write wins)
    pub fn set_prepayment(&mut self, enabled: bool) {
        self.is_prepayment = enabled;
        if enabled {
            self.has_custom_terms = false;
        }
    }

    /// Enable or disable custom terms; enabling clears prepayment
    pub fn set_custom_terms(&mut self, enabled: bool) {
        self.has_custom_terms = enabled;
        if enabled {
            self.is_prepayment = false;
        }
    }

    /// Sum of the three split percentages, absent components counted as 0
    pub fn split_sum(&self) -> f64 {
        self.down_payment_percent.unwrap_or(0.0)
            + self.delivery_payment_percent.unwrap_or(0.0)
            + self.acceptance_payment_percent.unwrap_or(0.0)
    }
}
