//! Server→observer message types.

use serde::{Deserialize, Serialize};

use cineseat_core::types::{SeatId, SeatStatus};

/// One seat state transition, pushed to every live observer.
///
/// Wire shape: `{"seat_id": "A1", "status": "locked"}`. Updates are
/// unordered across different seats; per-seat ordering follows the lock
/// store's serialization of transitions for that seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatUpdate {
    /// The seat that changed.
    pub seat_id: SeatId,
    /// Its new derived status.
    pub status: SeatStatus,
}

impl SeatUpdate {
    /// Build an update for a transition.
    pub fn new(seat_id: SeatId, status: SeatStatus) -> Self {
        Self { seat_id, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let update = SeatUpdate::new(SeatId::new("A1"), SeatStatus::Booked);
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"seat_id":"A1","status":"booked"}"#);
    }
}
