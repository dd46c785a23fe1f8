//! Lock manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use cineseat_core::config::lock::LockConfig;
use cineseat_core::error::AppError;
use cineseat_core::result::AppResult;
use cineseat_core::traits::SeatLockStore;
use cineseat_core::types::{SeatId, SeatLock, UserId};

/// Lock manager that wraps the configured lock store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct LockManager {
    /// The inner lock store provider.
    inner: Arc<dyn SeatLockStore>,
}

impl LockManager {
    /// Create a new lock manager from configuration.
    pub async fn new(config: &LockConfig) -> AppResult<Self> {
        let inner: Arc<dyn SeatLockStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis lock store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisLockStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory lock store");
                Arc::new(crate::memory::MemoryLockStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown lock provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a lock manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn SeatLockStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> &dyn SeatLockStore {
        self.inner.as_ref()
    }
}

#[async_trait]
impl SeatLockStore for LockManager {
    async fn try_acquire(
        &self,
        seat: &SeatId,
        holder: &UserId,
        ttl: Duration,
    ) -> AppResult<bool> {
        self.inner.try_acquire(seat, holder, ttl).await
    }

    async fn holder(&self, seat: &SeatId) -> AppResult<Option<UserId>> {
        self.inner.holder(seat).await
    }

    async fn release_if_held_by(&self, seat: &SeatId, holder: &UserId) -> AppResult<bool> {
        self.inner.release_if_held_by(seat, holder).await
    }

    async fn active_locks(&self) -> AppResult<Vec<SeatLock>> {
        self.inner.active_locks().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
