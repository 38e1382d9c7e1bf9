//! API Response types
//!
//! Standardized response structures spoken by the persistence gateway.

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All gateway responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether this response carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

/// Paginated list envelope
///
/// Catalog list endpoints optionally paginate; the envelope exposes the
/// current page of `results` and the total `count` across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub results: Vec<T>,
    /// Total item count across all pages
    pub count: u64,
}

impl<T> Page<T> {
    /// Wrap a full, unpaginated result set
    pub fn complete(results: Vec<T>) -> Self {
        let count = results.len() as u64;
        Self { results, count }
    }

    /// Whether more pages exist beyond the returned results
    pub fn is_partial(&self) -> bool {
        (self.results.len() as u64) < self.count
    }
}
