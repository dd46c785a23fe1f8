//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

/// Body of the claim and confirm endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeatRequest {
    /// The seat to act on.
    #[validate(length(min = 1, message = "seat_id must not be empty"))]
    pub seat_id: String,
}

/// Query parameters of the admin audit dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    /// Restrict to events for this user.
    pub user_id: Option<String>,
    /// Restrict to events of this kind (e.g. `LOCK_TIMEOUT`).
    pub event: Option<String>,
}
