//! Application state shared across all handlers.

use std::sync::Arc;

use cineseat_core::config::AppConfig;
use cineseat_core::traits::SeatLockStore;
use cineseat_realtime::ObserverRegistry;
use cineseat_service::{AuditQueryService, ReservationService};

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Reservation coordinator.
    pub reservations: Arc<ReservationService>,
    /// Audit trail queries for the admin dashboard.
    pub audit: Arc<AuditQueryService>,
    /// Live observer connections.
    pub observers: Arc<ObserverRegistry>,
    /// Lock store handle, used by the health endpoint.
    pub locks: Arc<dyn SeatLockStore>,
}
