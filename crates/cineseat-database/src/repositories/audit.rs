//! Audit store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;

use cineseat_core::error::{AppError, ErrorKind};
use cineseat_core::events::{AuditEvent, AuditEventKind, AuditFilter};
use cineseat_core::result::AppResult;
use cineseat_core::traits::AuditStore;
use cineseat_core::types::{SeatId, UserId};

/// PostgreSQL-backed audit store.
#[derive(Debug, Clone)]
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    /// Create a new audit store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AuditRow {
    event: String,
    seat_id: String,
    user_id: String,
    occurred_at: DateTime<Utc>,
    message: String,
}

impl AuditRow {
    /// Rows whose event kind is no longer recognized are skipped rather
    /// than failing the whole query.
    fn into_event(self) -> Option<AuditEvent> {
        let kind: AuditEventKind = match self.event.parse() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(event = %self.event, "Skipping audit row with unknown event kind");
                return None;
            }
        };

        Some(AuditEvent {
            event: kind,
            seat_id: SeatId::from(self.seat_id),
            user_id: UserId::from(self.user_id),
            timestamp: self.occurred_at,
            message: self.message,
        })
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn append(&self, event: &AuditEvent) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO audit_log (event, seat_id, user_id, occurred_at, message) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(event.event.as_str())
        .bind(event.seat_id.as_str())
        .bind(event.user_id.as_str())
        .bind(event.timestamp)
        .bind(&event.message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append audit event", e)
        })?;

        Ok(())
    }

    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.event.is_some() {
            conditions.push(format!("event = ${param_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT event, seat_id, user_id, occurred_at, message FROM audit_log \
             {where_clause} ORDER BY occurred_at DESC"
        );

        let mut query = sqlx::query_as::<_, AuditRow>(&sql);
        if let Some(user_id) = &filter.user_id {
            query = query.bind(user_id.as_str().to_string());
        }
        if let Some(event) = &filter.event {
            query = query.bind(event.as_str());
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search audit log", e)
        })?;

        Ok(rows.into_iter().filter_map(AuditRow::into_event).collect())
    }
}
