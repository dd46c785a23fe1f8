//! Caller roles, derived from the trusted identity headers.

use serde::{Deserialize, Serialize};

/// Role of an authenticated caller.
///
/// CineSeat performs no authentication itself; the gateway in front of it
/// supplies identity headers, and the role is derived from the configured
/// administrator email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular user: may claim and confirm seats.
    User,
    /// Administrator: may additionally query the audit dashboard.
    Admin,
}

impl Role {
    /// Returns whether this role grants admin access.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
