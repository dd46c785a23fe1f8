//! Seat state machine types and the derived listing view.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::{SeatId, UserId};
use crate::error::AppError;

/// Lifecycle state of a seat.
///
/// `booked` is terminal: once a booking exists for a seat it never returns
/// to `locked` or `available` through this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// No live lock and no booking.
    Available,
    /// A live, unexpired hold exists.
    Locked,
    /// A durable booking exists.
    Booked,
}

impl SeatStatus {
    /// Return the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Locked => "locked",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeatStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "locked" => Ok(Self::Locked),
            "booked" => Ok(Self::Booked),
            other => Err(AppError::validation(format!(
                "Unknown seat status: '{other}'"
            ))),
        }
    }
}

/// A durable booking record. Never mutated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Storage identifier.
    pub id: Uuid,
    /// The booked seat.
    pub seat_id: SeatId,
    /// The user the seat is booked for.
    pub user_id: UserId,
    /// Always [`SeatStatus::Booked`].
    pub status: SeatStatus,
    /// When the booking was confirmed.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a booking record.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// The seat being booked.
    pub seat_id: SeatId,
    /// The confirmed holder.
    pub user_id: UserId,
    /// Confirmation time.
    pub created_at: DateTime<Utc>,
}

/// Snapshot of a live lock, as reported by the lock store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLock {
    /// The held seat.
    pub seat_id: SeatId,
    /// Identity that currently owns the hold.
    pub holder: UserId,
}

/// One entry of the seat listing: the derived status of a seat.
///
/// `user_id` and `created_at` are populated only for booked seats; a locked
/// seat exposes no holder identity to observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    /// The seat.
    pub seat_id: SeatId,
    /// Derived status, precedence booked > locked > available.
    pub status: SeatStatus,
    /// Owner of the booking, if booked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Booking time, if booked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SeatView {
    /// Build the listing entry for a booked seat.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            seat_id: booking.seat_id.clone(),
            status: SeatStatus::Booked,
            user_id: Some(booking.user_id.clone()),
            created_at: Some(booking.created_at),
        }
    }

    /// Build the listing entry for a seat under a live hold.
    pub fn locked(seat_id: SeatId) -> Self {
        Self {
            seat_id,
            status: SeatStatus::Locked,
            user_id: None,
            created_at: None,
        }
    }
}
