//! Engine configuration
//!
//! # Environment variables
//!
//! All values can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | PROCURE_SPLIT_TOLERANCE | 0.01 | Allowed deviation of the payment split sum from 100 |
//!
//! The default tolerance is an observed operational constant, not a
//! derived requirement; treat it as tunable.

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Allowed deviation of the custom payment split sum from 100
    pub split_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            split_tolerance: 0.01,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            split_tolerance: std::env::var("PROCURE_SPLIT_TOLERANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.split_tolerance),
        }
    }
}
