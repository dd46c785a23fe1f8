//! The reservation coordinator.

pub mod service;


pub use service::{ReservationOutcome, ReservationService};
