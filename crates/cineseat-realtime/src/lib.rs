//! # cineseat-realtime
//!
//! The observer side of CineSeat: a registry of live WebSocket connections
//! and best-effort fan-out of seat state transitions to all of them.
//! Observers never originate state changes.

pub mod handle;
pub mod message;
pub mod registry;

pub use handle::{ObserverHandle, ObserverId};
pub use message::SeatUpdate;
pub use registry::ObserverRegistry;
