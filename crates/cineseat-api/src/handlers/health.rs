//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health — lock store reachability and observer count.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let lock_store = match state.locks.health_check().await {
        Ok(true) => "connected",
        _ => "unreachable",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        lock_store: lock_store.to_string(),
        observers: state.observers.count(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
