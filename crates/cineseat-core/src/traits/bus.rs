//! Event bus trait: the best-effort pub/sub channel for audit messages.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::result::AppResult;

/// Trait for the transient pub/sub channel between the coordinator and the
/// audit recorder.
///
/// Delivery is at-most-once and non-durable: a payload published while no
/// subscriber is attached, or lost in transit, is gone permanently. Callers
/// must treat `publish` as fire-and-forget and never let a bus failure fail
/// the originating operation.
#[async_trait]
pub trait EventBus: Send + Sync + std::fmt::Debug + 'static {
    /// Publish a serialized payload to the bus channel.
    async fn publish(&self, payload: &str) -> AppResult<()>;

    /// Subscribe to the bus channel.
    ///
    /// Returns a receiver of raw payloads; the receiver yields `None` when
    /// the bus side shuts down.
    async fn subscribe(&self) -> AppResult<mpsc::Receiver<String>>;
}
