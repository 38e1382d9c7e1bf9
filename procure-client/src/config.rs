//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | GATEWAY_URL | http://localhost:3000 | Order gateway base URL |
//! | GATEWAY_TOKEN | (none) | Bearer token for the gateway |
//! | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
//! | SYNTHESIS_MAX_ATTEMPTS | 12 | Document polls before giving up |
//! | SYNTHESIS_POLL_DELAY_MS | 1000 | Delay between document polls |

/// Gateway connection settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Order gateway base URL
    pub base_url: String,
    /// Bearer token, if the gateway requires one
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Document synthesis polling settings
    pub synthesis: SynthesisConfig,
}

impl ClientConfig {
    /// Load the configuration from environment variables,
    /// falling back to defaults
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            token: std::env::var("GATEWAY_TOKEN").ok(),
            timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            synthesis: SynthesisConfig::from_env(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Polling settings for the document synthesis service
#[derive(Debug, Clone, Copy)]
pub struct SynthesisConfig {
    /// How many times to poll before reporting a timeout
    pub max_attempts: u32,
    /// Delay between polls in milliseconds
    pub poll_delay_ms: u64,
}

impl SynthesisConfig {
    pub fn from_env() -> Self {
        Self {
            max_attempts: std::env::var("SYNTHESIS_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            poll_delay_ms: std::env::var("SYNTHESIS_POLL_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_attempts: 12,
            poll_delay_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.max_attempts, 12);
        assert_eq!(config.poll_delay_ms, 1000);
    }
}
