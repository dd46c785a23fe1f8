//! The audit recorder: sole consumer of the event bus.
//!
//! Drains the bus and persists every decodable event into the audit store.
//! Malformed payloads are dropped with a warning rather than crashing the
//! loop; store failures are logged and the loop keeps going. There is no
//! acknowledgement and no replay.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use cineseat_core::events::AuditEvent;
use cineseat_core::result::AppResult;
use cineseat_core::traits::{AuditStore, EventBus};

/// Long-lived consumer persisting delivered audit events.
#[derive(Debug)]
pub struct AuditRecorder {
    bus: Arc<dyn EventBus>,
    store: Arc<dyn AuditStore>,
}

impl AuditRecorder {
    /// Create a new recorder over the given bus and store.
    pub fn new(bus: Arc<dyn EventBus>, store: Arc<dyn AuditStore>) -> Self {
        Self { bus, store }
    }

    /// Run the drain loop until the shutdown signal flips or the bus closes.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> AppResult<()> {
        let mut rx = self.bus.subscribe().await?;
        info!("Audit recorder listening");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                payload = rx.recv() => {
                    match payload {
                        Some(payload) => self.record(&payload).await,
                        None => break,
                    }
                }
            }
        }

        info!("Audit recorder stopped");
        Ok(())
    }

    async fn record(&self, payload: &str) {
        let event: AuditEvent = match serde_json::from_str(payload) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Dropping malformed audit payload");
                return;
            }
        };

        match self.store.append(&event).await {
            Ok(()) => {
                debug!(
                    event = %event.event,
                    seat_id = %event.seat_id,
                    user_id = %event.user_id,
                    "Audit event recorded"
                );
            }
            Err(e) => {
                // Best-effort trail: the event is lost, the loop survives.
                error!(error = %e, event = %event.event, "Failed to persist audit event");
            }
        }
    }
}
