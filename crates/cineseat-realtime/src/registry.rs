//! Observer registry: tracks live connections and fans out seat updates.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use cineseat_core::config::realtime::RealtimeConfig;

use crate::handle::{ObserverHandle, ObserverId};
use crate::message::SeatUpdate;

/// Thread-safe registry of all live observer connections.
///
/// The registry only delivers; it never originates state changes. A write
/// failure to one connection removes that connection and never prevents
/// delivery to the others.
#[derive(Debug)]
pub struct ObserverRegistry {
    connections: DashMap<ObserverId, Arc<ObserverHandle>>,
    buffer_size: usize,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            connections: DashMap::new(),
            buffer_size: config.channel_buffer_size.max(1),
        }
    }

    /// Register a new observer connection.
    ///
    /// Returns the handle and the receiver the transport task drains into
    /// the socket. Connections are admitted without further authorization.
    pub fn register(&self) -> (Arc<ObserverHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let handle = Arc::new(ObserverHandle::new(tx));
        self.connections.insert(handle.id, handle.clone());

        info!(
            conn_id = %handle.id,
            total = self.connections.len(),
            "Observer connection registered"
        );

        (handle, rx)
    }

    /// Unregister an observer connection.
    pub fn unregister(&self, id: &ObserverId) {
        if let Some((_, handle)) = self.connections.remove(id) {
            handle.mark_dead();
            info!(
                conn_id = %id,
                total = self.connections.len(),
                "Observer connection unregistered"
            );
        }
    }

    /// Push one seat update to every live observer.
    pub fn broadcast(&self, update: &SeatUpdate) {
        let msg = match serde_json::to_string(update) {
            Ok(msg) => msg,
            Err(e) => {
                error!(error = %e, "Failed to serialize seat update");
                return;
            }
        };

        let mut dead = Vec::new();
        for entry in self.connections.iter() {
            let handle = entry.value();
            if !handle.send(msg.clone()) && !handle.is_alive() {
                dead.push(handle.id);
            }
        }

        for id in dead {
            self.unregister(&id);
        }

        debug!(
            seat_id = %update.seat_id,
            status = %update.status,
            observers = self.connections.len(),
            "Seat update broadcast"
        );
    }

    /// Number of live connections.
    pub fn count(&self) -> usize {
        self.connections.len()
    }

    /// Close every connection (process shutdown).
    pub fn close_all(&self) {
        for entry in self.connections.iter() {
            entry.value().mark_dead();
        }
        let total = self.connections.len();
        self.connections.clear();
        info!(count = total, "All observer connections closed");
    }
}

#[cfg(test)]
mod tests {
    use cineseat_core::types::{SeatId, SeatStatus};

    use super::*;

    fn registry() -> ObserverRegistry {
        ObserverRegistry::new(&RealtimeConfig::default())
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_observers() {
        let registry = registry();
        let (_h1, mut rx1) = registry.register();
        let (_h2, mut rx2) = registry.register();

        registry.broadcast(&SeatUpdate::new(SeatId::new("A1"), SeatStatus::Locked));

        let m1 = rx1.recv().await.expect("first observer");
        let m2 = rx2.recv().await.expect("second observer");
        assert_eq!(m1, r#"{"seat_id":"A1","status":"locked"}"#);
        assert_eq!(m1, m2);
    }

    #[tokio::test]
    async fn test_dead_connection_is_pruned() {
        let registry = registry();
        let (_h1, rx1) = registry.register();
        let (_h2, mut rx2) = registry.register();
        assert_eq!(registry.count(), 2);

        // Dropping the receiver closes the channel: the next broadcast
        // detects the dead connection and removes it.
        drop(rx1);
        registry.broadcast(&SeatUpdate::new(SeatId::new("A1"), SeatStatus::Available));

        assert_eq!(registry.count(), 1);
        assert!(rx2.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_unregister_is_idempotent() {
        let registry = registry();
        let (handle, _rx) = registry.register();

        registry.unregister(&handle.id);
        registry.unregister(&handle.id);
        assert_eq!(registry.count(), 0);
    }

    #[tokio::test]
    async fn test_close_all_empties_registry() {
        let registry = registry();
        let (_h1, _rx1) = registry.register();
        let (_h2, _rx2) = registry.register();

        registry.close_all();
        assert_eq!(registry.count(), 0);
    }
}
