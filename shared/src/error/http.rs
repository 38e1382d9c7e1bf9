//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (state-dependent rejections)
            Self::AlreadyExists
            | Self::PrecisionLocked
            | Self::InvalidTransition
            | Self::OrderClosed => StatusCode::CONFLICT,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::UncheckedItems
            | Self::SupplierRequired
            | Self::ItemsRequired
            | Self::SplitMismatch
            | Self::PrepaymentConflict => StatusCode::BAD_REQUEST,

            // 502 Bad Gateway (upstream failures)
            Self::TransportError => StatusCode::BAD_GATEWAY,

            // 504 Gateway Timeout
            Self::SynthesisTimeout => StatusCode::GATEWAY_TIMEOUT,

            // 207-ish mixed outcome reported as 200 with a report body;
            // when surfaced as an error it is a client-side concern
            Self::PartialBatchFailure => StatusCode::OK,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl super::AppError {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}
