//! Unified error codes for the procurement order system
//!
//! Error codes are shared between the engine, the client and the gateway.
//! They are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order lifecycle errors
//! - 5xxx: Payment term errors
//! - 9xxx: System / transport errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the gateway and UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Line item not found
    ItemNotFound = 4002,
    /// Field is frozen by the current order status
    PrecisionLocked = 4003,
    /// Lifecycle guard not satisfied for the attempted transition
    InvalidTransition = 4004,
    /// Confirmation attempted with unchecked line items
    UncheckedItems = 4005,
    /// Order is in a terminal state (paid or cancelled)
    OrderClosed = 4006,
    /// Supplier must be selected first
    SupplierRequired = 4007,
    /// Order has no line items
    ItemsRequired = 4008,

    // ==================== 5xxx: Payment term ====================
    /// Custom payment split does not sum to 100
    SplitMismatch = 5001,
    /// Prepayment and custom terms are mutually exclusive
    PrepaymentConflict = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Gateway transport failure
    TransportError = 9002,
    /// Document synthesis exhausted its retry budget
    SynthesisTimeout = 9003,
    /// Batch operation completed with mixed per-item outcomes
    PartialBatchFailure = 9004,
}

impl ErrorCode {
    /// Check if this code represents success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::OrderNotFound => "Order not found",
            Self::ItemNotFound => "Line item not found",
            Self::PrecisionLocked => "Field is frozen by the current order status",
            Self::InvalidTransition => "Lifecycle guard not satisfied",
            Self::UncheckedItems => "Not all line items passed the controlling check",
            Self::OrderClosed => "Order is in a terminal state",
            Self::SupplierRequired => "Supplier must be selected first",
            Self::ItemsRequired => "Order has no line items",

            Self::SplitMismatch => "Payment split percentages do not sum to 100",
            Self::PrepaymentConflict => "Prepayment and custom terms are mutually exclusive",

            Self::InternalError => "Internal error",
            Self::TransportError => "Gateway transport failure",
            Self::SynthesisTimeout => "Document synthesis timed out",
            Self::PartialBatchFailure => "Batch operation partially failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when deserializing an unknown error code value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            4001 => Self::OrderNotFound,
            4002 => Self::ItemNotFound,
            4003 => Self::PrecisionLocked,
            4004 => Self::InvalidTransition,
            4005 => Self::UncheckedItems,
            4006 => Self::OrderClosed,
            4007 => Self::SupplierRequired,
            4008 => Self::ItemsRequired,

            5001 => Self::SplitMismatch,
            5002 => Self::PrepaymentConflict,

            9001 => Self::InternalError,
            9002 => Self::TransportError,
            9003 => Self::SynthesisTimeout,
            9004 => Self::PartialBatchFailure,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, *self as u16)
    }
}
