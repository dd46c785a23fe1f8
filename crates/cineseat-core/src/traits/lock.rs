//! Seat lock store trait: the distributed mutual-exclusion primitive.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{SeatId, SeatLock, UserId};

/// Trait for the shared key-value medium holding seat locks.
///
/// For a fixed seat, `try_acquire` establishes a strict total order of
/// winners (exactly one winner per window), and `release_if_held_by` is
/// linearizable with respect to `try_acquire` for the same seat. These two
/// primitives are the only arbitration the system relies on; no caller-side
/// check-then-set sequences are permitted.
#[async_trait]
pub trait SeatLockStore: Send + Sync + std::fmt::Debug + 'static {
    /// Atomically create the lock for `seat` with the given holder and
    /// expiry, only if no live lock exists. Returns whether this caller won.
    async fn try_acquire(&self, seat: &SeatId, holder: &UserId, ttl: Duration)
    -> AppResult<bool>;

    /// Return the current holder of the lock for `seat`, if a live lock
    /// exists.
    async fn holder(&self, seat: &SeatId) -> AppResult<Option<UserId>>;

    /// Atomically delete the lock for `seat` only if it is currently held by
    /// `holder`. Returns whether this call deleted the lock.
    ///
    /// The compare-and-delete must be atomic: it must never delete a lock
    /// acquired by a different holder after this one expired.
    async fn release_if_held_by(&self, seat: &SeatId, holder: &UserId) -> AppResult<bool>;

    /// Snapshot of all live, unexpired locks. Used by the seat listing.
    async fn active_locks(&self) -> AppResult<Vec<SeatLock>>;

    /// Check that the lock store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
