//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Gateway rejected the request as invalid
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found behind the gateway
    #[error("not found: {0}")]
    NotFound(String),

    /// Gateway rejected the request because of the order's state
    #[error("conflict: {0}")]
    Conflict(String),

    /// Structured error payload passed through from the gateway
    #[error("gateway error: {0}")]
    Api(AppError),

    /// Document synthesis gave no result within the polling budget
    #[error("document synthesis timed out after {attempts} attempts")]
    SynthesisTimeout { attempts: u32 },

    /// Gateway-side failure
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Error code to report upstream
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Transport(_) => ErrorCode::TransportError,
            Self::SynthesisTimeout { .. } => ErrorCode::SynthesisTimeout,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Api(err) => err.code,
            _ => ErrorCode::InternalError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(
            ClientError::SynthesisTimeout { attempts: 12 }.code(),
            ErrorCode::SynthesisTimeout
        );
        assert_eq!(
            ClientError::Validation("x".into()).code(),
            ErrorCode::ValidationFailed
        );
        let api = ClientError::Api(AppError::new(ErrorCode::OrderNotFound));
        assert_eq!(api.code(), ErrorCode::OrderNotFound);
    }
}
