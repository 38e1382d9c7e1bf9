//! Procurement order lifecycle engine
//!
//! The synchronous core of the procurement system:
//!
//! - **orders**: command actions mutating an order under lifecycle rules
//! - **lifecycle**: status guards, auto-advance, and frozen-field rules
//! - **pricing**: derived prices, line and order totals, position upkeep
//! - **payment_split**: the three-way percentage invariant for custom terms
//! - **sections**: which logical order sections are currently enterable
//!
//! All operations here run to completion without suspension; network
//! round-trips (persistence, document synthesis) live in `procure-client`.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod orders;
pub mod payment_split;
pub mod pricing;
pub mod sections;

pub use config::EngineConfig;
pub use error::OrderError;
pub use orders::{CommandAction, execute};
pub use sections::{SectionAccess, section_access};
