//! Booking store trait: durable, immutable booking records.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Booking, NewBooking, SeatId};

/// Trait for the shared document store holding bookings.
///
/// Bookings are insert-only; nothing in this system mutates or deletes one.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new booking record.
    ///
    /// Implementations must reject a second booking for the same seat with a
    /// conflict error; the seat's `booked` state is terminal.
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking>;

    /// Whether a booking exists for the given seat.
    async fn exists_for_seat(&self, seat: &SeatId) -> AppResult<bool>;

    /// All bookings, oldest first.
    async fn list_all(&self) -> AppResult<Vec<Booking>>;
}
