//! Lock key derivation.
//!
//! One lock per seat; the key is derived deterministically from the seat ID
//! so that every process arbitrating the same seat contends on the same key.

use cineseat_core::types::SeatId;

/// Namespace for seat lock keys.
pub const SEAT_LOCK_NAMESPACE: &str = "lock:seat:";

/// Build the lock key for a seat.
pub fn seat_lock_key(seat: &SeatId) -> String {
    format!("{SEAT_LOCK_NAMESPACE}{seat}")
}

/// Recover the seat ID from a lock key, if the key is in the seat lock
/// namespace.
pub fn seat_id_from_key(key: &str) -> Option<SeatId> {
    key.strip_prefix(SEAT_LOCK_NAMESPACE)
        .filter(|rest| !rest.is_empty())
        .map(SeatId::from)
}
