//! Booking store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use cineseat_core::error::{AppError, ErrorKind};
use cineseat_core::result::AppResult;
use cineseat_core::traits::BookingStore;
use cineseat_core::types::{Booking, NewBooking, SeatId, SeatStatus, UserId};

/// PostgreSQL-backed booking store.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    /// Create a new booking store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    seat_id: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            seat_id: SeatId::from(row.seat_id),
            user_id: UserId::from(row.user_id),
            status: SeatStatus::Booked,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            "INSERT INTO bookings (id, seat_id, user_id, status, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, seat_id, user_id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(booking.seat_id.as_str())
        .bind(booking.user_id.as_str())
        .bind(SeatStatus::Booked.as_str())
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique index on seat_id backstops the terminal-state
            // invariant against racing confirmations.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::conflict(format!(
                    "Seat '{}' has already been booked",
                    booking.seat_id
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to insert booking", e)
            }
        })?;

        Ok(row.into())
    }

    async fn exists_for_seat(&self, seat: &SeatId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM bookings WHERE seat_id = $1)")
            .bind(seat.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check booking existence", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, seat_id, user_id, created_at FROM bookings ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
