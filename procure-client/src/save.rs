//! Persist-then-synthesize
//!
//! Saving an order is one logical operation with two network legs: the
//! gateway persists the order, then (for order types with a generated
//! document, once the order has been placed) the synthesis client warms
//! up the rendered purchase order. A synthesis timeout does not fail the
//! save; the order is persisted either way.

use crate::error::{ClientError, ClientResult};
use crate::synthesis::{ArtifactHandle, ArtifactSource, DocumentSynthesisClient};
use async_trait::async_trait;
use shared::models::{Order, OrderStatus};

/// Persistence seam for orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create or update the order, returning the gateway's copy
    /// (with id, order number and server-side fields filled in)
    async fn persist(&self, order: &Order) -> ClientResult<Order>;
}

/// Result of a combined save
#[derive(Debug)]
pub struct SaveOutcome {
    /// The persisted order as returned by the gateway
    pub order: Order,
    /// The rendered document, when one was produced in time
    pub artifact: Option<ArtifactHandle>,
    /// Set when the document poll budget ran out; the save itself stood
    pub synthesis_timed_out: bool,
}

/// Persist the order and warm up its rendered document.
///
/// Online orders and unplaced drafts skip the synthesis leg entirely.
pub async fn save_order<P: OrderStore, S: ArtifactSource>(
    store: &P,
    synthesis: &DocumentSynthesisClient<S>,
    order: &Order,
) -> ClientResult<SaveOutcome> {
    let saved = store.persist(order).await?;
    tracing::info!(
        order_id = ?saved.id,
        order_number = ?saved.order_number,
        status = ?saved.status,
        "Order saved"
    );

    let mut outcome = SaveOutcome {
        order: saved,
        artifact: None,
        synthesis_timed_out: false,
    };

    let wants_document = outcome.order.order_type.synthesizes_document()
        && outcome.order.status.at_least(OrderStatus::Ordered);
    if !wants_document {
        return Ok(outcome);
    }

    let order_id = outcome.order.id.clone().ok_or_else(|| {
        ClientError::InvalidResponse("gateway returned an order without an id".to_string())
    })?;

    match synthesis.warm_up(&order_id).await {
        Ok(handle) => outcome.artifact = Some(handle),
        Err(ClientError::SynthesisTimeout { attempts }) => {
            tracing::warn!(
                order_id,
                attempts,
                "Order saved, document still rendering"
            );
            outcome.synthesis_timed_out = true;
        }
        Err(err) => return Err(err),
    }
    Ok(outcome)
}
