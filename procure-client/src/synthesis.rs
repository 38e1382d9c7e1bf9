//! Document synthesis client
//!
//! The gateway renders the purchase-order document asynchronously after
//! an order is saved. This client polls for the rendered artifact with a
//! bounded budget and keeps the latest one cached, so repeated previews
//! do not re-download. Online orders never go through here; their order
//! document is a manual upload.

use crate::config::SynthesisConfig;
use crate::error::{ClientError, ClientResult};
use crate::retry::{Attempt, retry_bounded};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// A rendered document held in memory
///
/// Cloning is cheap; the bytes are shared. Replacing the cached handle
/// releases the previous document as soon as its last clone is dropped.
#[derive(Debug, Clone)]
pub struct ArtifactHandle {
    pub file_name: String,
    pub content_type: String,
    pub data: Arc<Vec<u8>>,
}

impl ArtifactHandle {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: Arc::new(data),
        }
    }
}

/// One poll of the synthesis service
#[derive(Debug, Clone)]
pub enum ArtifactStatus {
    /// Rendering finished, artifact attached
    Ready(ArtifactHandle),
    /// Rendering still in progress
    NotReady,
}

/// Where rendered documents come from
///
/// The production implementation is [`GatewayClient`](crate::GatewayClient);
/// tests substitute scripted sources.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Poll the rendered document for an order once
    async fn fetch(&self, order_id: &str) -> ClientResult<ArtifactStatus>;
}

/// Polling client with a single-slot artifact cache
pub struct DocumentSynthesisClient<S> {
    pub(crate) source: S,
    config: SynthesisConfig,
    cache: Mutex<Option<ArtifactHandle>>,
}

impl<S: ArtifactSource> DocumentSynthesisClient<S> {
    pub fn new(source: S, config: SynthesisConfig) -> Self {
        Self {
            source,
            config,
            cache: Mutex::new(None),
        }
    }

    /// Poll until the rendered document is available, within the budget.
    ///
    /// On success the handle replaces the cached one; the superseded
    /// document is released once its remaining clones drop. "Not yet
    /// rendered" and hard fetch failures both count as retryable
    /// attempts; exhausting the budget yields
    /// [`ClientError::SynthesisTimeout`].
    pub async fn warm_up(&self, order_id: &str) -> ClientResult<ArtifactHandle> {
        let delay = Duration::from_millis(self.config.poll_delay_ms);
        let outcome: Result<Option<ArtifactHandle>, ClientError> =
            retry_bounded(self.config.max_attempts, delay, |attempt| async move {
                tracing::debug!(order_id, attempt, "Polling document synthesis");
                match self.source.fetch(order_id).await {
                    Ok(ArtifactStatus::Ready(handle)) => Ok(Attempt::Done(handle)),
                    Ok(ArtifactStatus::NotReady) => Ok(Attempt::Again),
                    Err(err) => {
                        tracing::warn!(order_id, attempt, error = %err, "Document poll failed");
                        Ok(Attempt::Again)
                    }
                }
            })
            .await;
        let outcome = outcome?;

        match outcome {
            Some(handle) => {
                tracing::info!(
                    order_id,
                    file_name = %handle.file_name,
                    size = handle.data.len(),
                    "Order document ready"
                );
                *self.cache.lock() = Some(handle.clone());
                Ok(handle)
            }
            None => {
                tracing::warn!(
                    order_id,
                    attempts = self.config.max_attempts,
                    "Document synthesis did not finish within the polling budget"
                );
                Err(ClientError::SynthesisTimeout {
                    attempts: self.config.max_attempts,
                })
            }
        }
    }

    /// The most recently fetched document, if any
    pub fn cached(&self) -> Option<ArtifactHandle> {
        self.cache.lock().clone()
    }

    /// Drop the cached document (e.g. after the order changed)
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}
