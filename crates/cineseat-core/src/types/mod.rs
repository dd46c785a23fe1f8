//! Domain types shared across all CineSeat crates.

pub mod id;
pub mod role;
pub mod seat;

pub use id::{SeatId, UserId};
pub use role::Role;
pub use seat::{Booking, NewBooking, SeatLock, SeatStatus, SeatView};
