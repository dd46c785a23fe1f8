//! Admin dashboard handler: filtered audit trail reads.

use axum::Json;
use axum::extract::{Query, State};

use cineseat_core::events::{AuditEventKind, AuditFilter};
use cineseat_core::types::UserId;

use crate::dto::request::AuditQuery;
use crate::dto::response::DashboardResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /admin/dashboard?user_id=&event= — pass-through filtered audit query.
pub async fn dashboard(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<AuditQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let event = match query.event.as_deref() {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<AuditEventKind>()?),
        _ => None,
    };

    let filter = AuditFilter {
        user_id: query
            .user_id
            .filter(|id| !id.is_empty())
            .map(UserId::from),
        event,
    };

    let audit_logs = state.audit.search(&filter).await?;
    Ok(Json(DashboardResponse { audit_logs }))
}
