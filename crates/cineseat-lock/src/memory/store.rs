//! In-memory seat lock store for single-node deployments and tests.
//!
//! Entries carry a per-lock deadline measured on the tokio clock, so tests
//! running under a paused clock can drive expiry deterministically. Expired
//! entries are treated as absent everywhere and reaped lazily.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::time::Instant;
use tracing::debug;

use cineseat_core::result::AppResult;
use cineseat_core::traits::SeatLockStore;
use cineseat_core::types::{SeatId, SeatLock, UserId};

use crate::keys::{seat_id_from_key, seat_lock_key};

#[derive(Debug, Clone)]
struct LockEntry {
    holder: UserId,
    expires_at: Instant,
}

impl LockEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory lock store provider.
#[derive(Debug, Clone, Default)]
pub struct MemoryLockStore {
    locks: Arc<DashMap<String, LockEntry>>,
}

impl MemoryLockStore {
    /// Create an empty in-memory lock store.
    pub fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl SeatLockStore for MemoryLockStore {
    async fn try_acquire(
        &self,
        seat: &SeatId,
        holder: &UserId,
        ttl: Duration,
    ) -> AppResult<bool> {
        let entry = LockEntry {
            holder: holder.clone(),
            expires_at: Instant::now() + ttl,
        };

        // The entry guard holds the shard lock, making replace-if-expired
        // atomic with respect to concurrent acquirers of the same seat.
        let won = match self.locks.entry(seat_lock_key(seat)) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    occupied.insert(entry);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                true
            }
        };

        debug!(seat_id = %seat, holder = %holder, won, "Lock acquisition attempted");
        Ok(won)
    }

    async fn holder(&self, seat: &SeatId) -> AppResult<Option<UserId>> {
        let key = seat_lock_key(seat);
        self.locks.remove_if(&key, |_, entry| entry.is_expired());
        Ok(self
            .locks
            .get(&key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.holder.clone()))
    }

    async fn release_if_held_by(&self, seat: &SeatId, holder: &UserId) -> AppResult<bool> {
        let key = seat_lock_key(seat);
        let removed = self
            .locks
            .remove_if(&key, |_, entry| {
                !entry.is_expired() && entry.holder == *holder
            })
            .is_some();

        // A lock that silently hit its TTL is gone either way.
        self.locks.remove_if(&key, |_, entry| entry.is_expired());

        debug!(seat_id = %seat, holder = %holder, removed, "Lock release attempted");
        Ok(removed)
    }

    async fn active_locks(&self) -> AppResult<Vec<SeatLock>> {
        let locks = self
            .locks
            .iter()
            .filter(|entry| !entry.value().is_expired())
            .filter_map(|entry| {
                seat_id_from_key(entry.key()).map(|seat_id| SeatLock {
                    seat_id,
                    holder: entry.value().holder.clone(),
                })
            })
            .collect();
        Ok(locks)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserId {
        UserId::new("alice")
    }

    fn bob() -> UserId {
        UserId::new("bob")
    }

    fn seat() -> SeatId {
        SeatId::new("A1")
    }

    #[tokio::test]
    async fn test_first_acquirer_wins() {
        let store = MemoryLockStore::new();
        let ttl = Duration::from_secs(60);

        assert!(store.try_acquire(&seat(), &alice(), ttl).await.unwrap());
        assert!(!store.try_acquire(&seat(), &bob(), ttl).await.unwrap());
        assert_eq!(store.holder(&seat()).await.unwrap(), Some(alice()));
    }

    #[tokio::test]
    async fn test_release_requires_matching_holder() {
        let store = MemoryLockStore::new();
        store
            .try_acquire(&seat(), &alice(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(!store.release_if_held_by(&seat(), &bob()).await.unwrap());
        assert_eq!(store.holder(&seat()).await.unwrap(), Some(alice()));

        assert!(store.release_if_held_by(&seat(), &alice()).await.unwrap());
        assert_eq!(store.holder(&seat()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_release_is_idempotent() {
        let store = MemoryLockStore::new();
        store
            .try_acquire(&seat(), &alice(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(store.release_if_held_by(&seat(), &alice()).await.unwrap());
        assert!(!store.release_if_held_by(&seat(), &alice()).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_lock_is_absent() {
        let store = MemoryLockStore::new();
        store
            .try_acquire(&seat(), &alice(), Duration::from_secs(5))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(store.holder(&seat()).await.unwrap(), None);
        assert!(store.active_locks().await.unwrap().is_empty());
        // The expired hold is not released, it is simply gone.
        assert!(!store.release_if_held_by(&seat(), &alice()).await.unwrap());
        // The seat is re-acquirable by a new holder.
        assert!(
            store
                .try_acquire(&seat(), &bob(), Duration::from_secs(5))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_active_locks_snapshot() {
        let store = MemoryLockStore::new();
        store
            .try_acquire(&SeatId::new("A1"), &alice(), Duration::from_secs(60))
            .await
            .unwrap();
        store
            .try_acquire(&SeatId::new("B7"), &bob(), Duration::from_secs(60))
            .await
            .unwrap();

        let mut locks = store.active_locks().await.unwrap();
        locks.sort_by(|a, b| a.seat_id.as_str().cmp(b.seat_id.as_str()));
        assert_eq!(locks.len(), 2);
        assert_eq!(locks[0].seat_id, SeatId::new("A1"));
        assert_eq!(locks[0].holder, alice());
    }
}
