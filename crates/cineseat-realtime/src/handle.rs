//! Individual observer connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique observer connection identifier.
pub type ObserverId = Uuid;

/// A handle to a single observer connection.
///
/// Holds the sender half of the connection's outbound channel. Observers
/// carry no payload state beyond liveness.
#[derive(Debug)]
pub struct ObserverHandle {
    /// Unique connection ID.
    pub id: ObserverId,
    /// Sender for outbound messages.
    sender: mpsc::Sender<String>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still alive.
    alive: AtomicBool,
}

impl ObserverHandle {
    /// Create a new handle around the outbound sender.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Push a message to this observer without blocking the broadcaster.
    ///
    /// A full buffer drops the message for this observer only; a closed
    /// channel marks the connection dead so the registry removes it.
    pub fn send(&self, msg: String) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(msg) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Observer buffer full, dropping update");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_dead();
                false
            }
        }
    }

    /// Check whether the connection is alive.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection as dead.
    pub fn mark_dead(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
