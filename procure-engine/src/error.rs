//! Engine error type
//!
//! Domain errors raised by command actions and validators. Converts into
//! [`shared::AppError`] at the crate boundary, carrying the numeric order
//! codes and structured details the gateway and UI layers expect.

use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use thiserror::Error;

/// Errors raised by the order engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Cross-field or input validation failed; raised before anything
    /// is mutated
    #[error("{0}")]
    Validation(String),

    /// Mutation attempted on a field frozen by the current status
    #[error("{field} is frozen by the current order status")]
    PrecisionLocked { field: &'static str },

    /// Confirmation attempted while items are missing their controlling
    /// check; positions name the offending lines
    #[error("controlling check missing for item(s) {positions:?}")]
    UncheckedItems { positions: Vec<u32> },

    /// A lifecycle date was set while the order is not in the stage the
    /// guard requires; the date is not applied
    #[error("cannot {attempted} while order status is {status:?}")]
    InvalidTransition {
        status: OrderStatus,
        attempted: &'static str,
    },

    /// The order is paid or cancelled and can no longer change
    #[error("order is {0:?} and can no longer change")]
    OrderClosed(OrderStatus),

    /// No line item with the given position
    #[error("no line item at position {0}")]
    ItemNotFound(u32),

    /// Line items require a supplier to be selected first
    #[error("supplier must be selected first")]
    SupplierRequired,

    /// The attempted operation requires at least one line item
    #[error("order has no line items")]
    ItemsRequired,

    /// Custom payment split does not sum to 100 within tolerance
    #[error("custom payment split sums to {sum}, expected 100 (±{tolerance})")]
    SplitMismatch { sum: f64, tolerance: f64 },

    /// Prepayment and custom terms were both set
    #[error("prepayment and custom terms are mutually exclusive")]
    PrepaymentConflict,
}

impl From<AppError> for OrderError {
    fn from(err: AppError) -> Self {
        Self::Validation(err.message)
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::Validation(_) => AppError::with_message(ErrorCode::ValidationFailed, message),
            OrderError::PrecisionLocked { field } => {
                AppError::with_message(ErrorCode::PrecisionLocked, message).with_detail("field", field)
            }
            OrderError::UncheckedItems { positions } => {
                AppError::with_message(ErrorCode::UncheckedItems, message)
                    .with_detail("positions", positions)
            }
            OrderError::InvalidTransition { status, .. } => {
                AppError::with_message(ErrorCode::InvalidTransition, message)
                    .with_detail("status", format!("{status:?}"))
            }
            OrderError::OrderClosed(status) => {
                AppError::with_message(ErrorCode::OrderClosed, message)
                    .with_detail("status", format!("{status:?}"))
            }
            OrderError::ItemNotFound(position) => {
                AppError::with_message(ErrorCode::ItemNotFound, message)
                    .with_detail("position", position)
            }
            OrderError::SupplierRequired => {
                AppError::with_message(ErrorCode::SupplierRequired, message)
            }
            OrderError::ItemsRequired => AppError::with_message(ErrorCode::ItemsRequired, message),
            OrderError::SplitMismatch { sum, .. } => {
                AppError::with_message(ErrorCode::SplitMismatch, message).with_detail("sum", sum)
            }
            OrderError::PrepaymentConflict => {
                AppError::with_message(ErrorCode::PrepaymentConflict, message)
            }
        }
    }
}
