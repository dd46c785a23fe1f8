//! Audit events carried over the internal event bus.
//!
//! Delivery is best-effort and at-most-once: the audit trail is advisory,
//! not authoritative. The JSON form of [`AuditEvent`] is the bus wire
//! format.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::{SeatId, UserId};

/// Kind of audited transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    /// A hold expired without confirmation and the seat was returned.
    LockTimeout,
    /// A hold was confirmed into a durable booking.
    BookingSuccess,
}

impl AuditEventKind {
    /// Return the SCREAMING_SNAKE_CASE wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LockTimeout => "LOCK_TIMEOUT",
            Self::BookingSuccess => "BOOKING_SUCCESS",
        }
    }
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditEventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCK_TIMEOUT" => Ok(Self::LockTimeout),
            "BOOKING_SUCCESS" => Ok(Self::BookingSuccess),
            other => Err(AppError::validation(format!(
                "Unknown audit event kind: '{other}'"
            ))),
        }
    }
}

/// A record of a significant seat transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// What happened.
    pub event: AuditEventKind,
    /// The affected seat.
    pub seat_id: SeatId,
    /// The holder at the time of the transition.
    pub user_id: UserId,
    /// When the transition happened.
    pub timestamp: DateTime<Utc>,
    /// Human-readable description.
    pub message: String,
}

impl AuditEvent {
    /// Event emitted when an unconfirmed hold expires.
    pub fn lock_timeout(seat_id: SeatId, user_id: UserId) -> Self {
        Self {
            event: AuditEventKind::LockTimeout,
            seat_id,
            user_id,
            timestamp: Utc::now(),
            message: "Payment window elapsed; seat returned to the pool".to_string(),
        }
    }

    /// Event emitted when a hold is confirmed into a booking.
    pub fn booking_success(seat_id: SeatId, user_id: UserId) -> Self {
        Self {
            event: AuditEventKind::BookingSuccess,
            seat_id,
            user_id,
            timestamp: Utc::now(),
            message: "Payment confirmed; seat booked".to_string(),
        }
    }
}

/// Filter for querying the persisted audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Restrict to events for this user.
    pub user_id: Option<UserId>,
    /// Restrict to events of this kind.
    pub event: Option<AuditEventKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_format() {
        let json = serde_json::to_string(&AuditEventKind::LockTimeout).expect("serialize");
        assert_eq!(json, "\"LOCK_TIMEOUT\"");
        let parsed: AuditEventKind = "BOOKING_SUCCESS".parse().expect("parse");
        assert_eq!(parsed, AuditEventKind::BookingSuccess);
    }

    #[test]
    fn test_event_roundtrip() {
        let event = AuditEvent::booking_success(SeatId::new("A1"), UserId::new("alice"));
        let payload = serde_json::to_string(&event).expect("serialize");
        let decoded: AuditEvent = serde_json::from_str(&payload).expect("deserialize");
        assert_eq!(decoded.event, AuditEventKind::BookingSuccess);
        assert_eq!(decoded.seat_id, SeatId::new("A1"));
    }
}
