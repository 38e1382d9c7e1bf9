//! Shared types for the procurement order system
//!
//! Common types used across the engine and client crates: the order data
//! model, catalog references, error types with stable numeric codes, and
//! the response envelope spoken by the persistence gateway.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCategory, ErrorCode};
pub use response::{ApiResponse, Page};
