//! Transfer-to-receipt batch reporting
//!
//! The gateway operation "transfer fulfilled items to inventory receipt"
//! accepts a set of item identifiers and reports success or failure per
//! item. Failed items do not roll back the ones that succeeded.

use serde::{Deserialize, Serialize};

/// Outcome for a single transferred item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// Identifier of the item as submitted
    pub item_id: String,
    /// Whether the transfer succeeded for this item
    pub success: bool,
    /// Failure reason, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-item report of a transfer batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransferReport {
    pub outcomes: Vec<TransferOutcome>,
}

impl TransferReport {
    /// Items that transferred successfully
    pub fn succeeded(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.outcomes.iter().filter(|o| o.success)
    }

    /// Items that failed to transfer
    pub fn failed(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    /// Whether the batch completed with a mix of successes and failures
    pub fn is_partial_failure(&self) -> bool {
        let failures = self.failed().count();
        failures > 0 && failures < self.outcomes.len()
    }

    /// Whether every item transferred
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.success)
    }
}
