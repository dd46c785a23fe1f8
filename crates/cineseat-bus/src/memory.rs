//! In-memory event bus for single-node deployments.
//!
//! A broadcast channel fans payloads out to subscribers; a payload published
//! with no subscriber attached is dropped, matching the bus's at-most-once
//! contract.

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc};
use tracing::warn;

use cineseat_core::result::AppResult;
use cineseat_core::traits::EventBus;

/// In-memory event bus implementation.
#[derive(Debug)]
pub struct MemoryEventBus {
    tx: broadcast::Sender<String>,
    buffer_size: usize,
}

impl MemoryEventBus {
    /// Create a new in-memory bus with the given buffer size.
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self {
            tx,
            buffer_size: buffer_size.max(1),
        }
    }
}

#[async_trait]
impl EventBus for MemoryEventBus {
    async fn publish(&self, payload: &str) -> AppResult<()> {
        // No receiver attached means the message is gone permanently.
        let _ = self.tx.send(payload.to_string());
        Ok(())
    }

    async fn subscribe(&self) -> AppResult<mpsc::Receiver<String>> {
        let mut broadcast_rx = self.tx.subscribe();
        let (tx, rx) = mpsc::channel(self.buffer_size);

        tokio::spawn(async move {
            loop {
                match broadcast_rx.recv().await {
                    Ok(payload) => {
                        if tx.send(payload).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Bus subscriber lagged; messages dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_to_subscriber() {
        let bus = MemoryEventBus::new(16);
        let mut rx = bus.subscribe().await.unwrap();

        bus.publish("{\"event\":\"BOOKING_SUCCESS\"}").await.unwrap();

        let payload = rx.recv().await.expect("payload delivered");
        assert_eq!(payload, "{\"event\":\"BOOKING_SUCCESS\"}");
    }

    #[tokio::test]
    async fn test_publish_without_subscriber_is_dropped() {
        let bus = MemoryEventBus::new(16);
        bus.publish("lost").await.unwrap();

        // A later subscriber never sees earlier messages.
        let mut rx = bus.subscribe().await.unwrap();
        bus.publish("seen").await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("seen"));
    }
}
