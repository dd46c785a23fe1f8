//! Audit store trait: the durable side of the advisory audit trail.

use async_trait::async_trait;

use crate::events::{AuditEvent, AuditFilter};
use crate::result::AppResult;

/// Trait for the store persisting delivered audit events.
#[async_trait]
pub trait AuditStore: Send + Sync + std::fmt::Debug + 'static {
    /// Append one delivered audit event.
    async fn append(&self, event: &AuditEvent) -> AppResult<()>;

    /// Query persisted events matching the filter, newest first.
    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>>;
}
