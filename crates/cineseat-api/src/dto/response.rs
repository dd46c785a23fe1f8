//! Response DTOs.

use serde::{Deserialize, Serialize};

use cineseat_core::events::AuditEvent;

/// Outcome of a claim or confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeResponse {
    /// Whether the operation was accepted.
    pub accepted: bool,
    /// Human-readable description.
    pub message: String,
}

impl OutcomeResponse {
    /// Build an accepted outcome.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: message.into(),
        }
    }
}

/// Admin dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Matching audit events, newest first.
    pub audit_logs: Vec<AuditEvent>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Lock store reachability.
    pub lock_store: String,
    /// Number of live observer connections.
    pub observers: usize,
    /// Server version.
    pub version: String,
}
