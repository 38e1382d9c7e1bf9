//! Async client side of the procurement system
//!
//! Talks to the order gateway over HTTPS and drives the document
//! synthesis workflow:
//!
//! - **gateway**: typed REST client for orders, catalogs and transfers
//! - **synthesis**: polling client for the rendered order document
//! - **save**: the combined persist-then-synthesize operation
//! - **retry**: the bounded retry loop both of the above share
//!
//! Everything stateful about an order itself lives in `procure-engine`;
//! this crate only moves orders and documents across the wire.

pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod retry;
pub mod save;
pub mod synthesis;

pub use config::{ClientConfig, SynthesisConfig};
pub use error::{ClientError, ClientResult};
pub use gateway::GatewayClient;
pub use save::{SaveOutcome, save_order};
pub use synthesis::{ArtifactHandle, ArtifactSource, ArtifactStatus, DocumentSynthesisClient};
