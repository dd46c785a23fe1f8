//! Read-only audit trail queries for the admin dashboard.

use std::sync::Arc;

use tracing::debug;

use cineseat_core::events::{AuditEvent, AuditFilter};
use cineseat_core::result::AppResult;
use cineseat_core::traits::AuditStore;

/// Pass-through filtered reads over the persisted audit trail.
#[derive(Debug, Clone)]
pub struct AuditQueryService {
    store: Arc<dyn AuditStore>,
}

impl AuditQueryService {
    /// Create a new audit query service.
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Query persisted audit events matching the filter, newest first.
    pub async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        let events = self.store.search(filter).await?;
        debug!(
            user_id = filter.user_id.as_ref().map(|u| u.as_str()),
            event = filter.event.map(|e| e.as_str()),
            results = events.len(),
            "Audit trail queried"
        );
        Ok(events)
    }
}
