//! Redis seat lock store using `SET NX EX` for acquisition and a Lua script
//! for the atomic compare-and-delete release.
//!
//! Suitable for multi-node deployments: Redis is the single arbiter for all
//! processes contending on the same seat.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use cineseat_core::error::{AppError, ErrorKind};
use cineseat_core::result::AppResult;
use cineseat_core::traits::SeatLockStore;
use cineseat_core::types::{SeatId, SeatLock, UserId};

use crate::keys::{SEAT_LOCK_NAMESPACE, seat_id_from_key, seat_lock_key};

use super::client::RedisClient;

/// Lua script for atomic compare-and-delete.
///
/// KEYS[1] = lock key
/// ARGV[1] = expected holder
///
/// Returns the number of keys deleted (1 if this holder's lock was removed,
/// 0 if the key is absent or held by someone else).
const RELEASE_IF_HELD_SCRIPT: &str = r#"
    if redis.call('GET', KEYS[1]) == ARGV[1] then
        return redis.call('DEL', KEYS[1])
    end
    return 0
"#;

/// Redis-backed seat lock store.
#[derive(Debug, Clone)]
pub struct RedisLockStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisLockStore {
    /// Create a new Redis lock store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Lock, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl SeatLockStore for RedisLockStore {
    async fn try_acquire(
        &self,
        seat: &SeatId,
        holder: &UserId,
        ttl: Duration,
    ) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(&seat_lock_key(seat));
        let mut conn = self.client.conn_mut();

        // SET key holder EX ttl NX: a single atomic create-with-expiry.
        let result: Option<String> = redis::cmd("SET")
            .arg(&full_key)
            .arg(holder.as_str())
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;

        let won = result.is_some();
        debug!(seat_id = %seat, holder = %holder, won, "Lock acquisition attempted");
        Ok(won)
    }

    async fn holder(&self, seat: &SeatId) -> AppResult<Option<UserId>> {
        let full_key = self.client.prefixed_key(&seat_lock_key(seat));
        let mut conn = self.client.conn_mut();
        let holder: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(holder.map(UserId::from))
    }

    async fn release_if_held_by(&self, seat: &SeatId, holder: &UserId) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(&seat_lock_key(seat));
        let mut conn = self.client.conn_mut();

        let deleted: i64 = redis::Script::new(RELEASE_IF_HELD_SCRIPT)
            .key(&full_key)
            .arg(holder.as_str())
            .invoke_async(&mut conn)
            .await
            .map_err(Self::map_err)?;

        debug!(seat_id = %seat, holder = %holder, removed = deleted > 0, "Lock release attempted");
        Ok(deleted > 0)
    }

    async fn active_locks(&self) -> AppResult<Vec<SeatLock>> {
        let pattern = self
            .client
            .prefixed_key(&format!("{SEAT_LOCK_NAMESPACE}*"));
        let mut conn = self.client.conn_mut();

        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;

        let mut locks = Vec::with_capacity(keys.len());
        for full_key in keys {
            let Some(seat_id) = full_key
                .strip_prefix(self.client.prefix())
                .and_then(seat_id_from_key)
            else {
                continue;
            };

            // The key may expire between KEYS and GET; an absent value just
            // means the lock resolved in the meantime.
            let holder: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
            if let Some(holder) = holder {
                locks.push(SeatLock {
                    seat_id,
                    holder: UserId::from(holder),
                });
            }
        }

        Ok(locks)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
