//! Timestamp and text validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! model constructors and command handlers.

use crate::error::AppError;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: supplier, article, payment term, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Article numbers, units, currency codes and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Comments, descriptions, cancel reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Stored document references / file names
pub const MAX_REFERENCE_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
