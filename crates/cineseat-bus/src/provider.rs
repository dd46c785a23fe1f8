//! Bus manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::info;

use cineseat_core::config::bus::BusConfig;
use cineseat_core::error::AppError;
use cineseat_core::result::AppResult;
use cineseat_core::traits::EventBus;

/// Bus manager that wraps the configured event bus provider.
#[derive(Debug, Clone)]
pub struct BusManager {
    /// The inner bus provider.
    inner: Arc<dyn EventBus>,
}

impl BusManager {
    /// Create a new bus manager from configuration.
    pub async fn new(config: &BusConfig) -> AppResult<Self> {
        let inner: Arc<dyn EventBus> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis event bus");
                Arc::new(crate::redis::RedisEventBus::connect(config).await?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory event bus");
                Arc::new(crate::memory::MemoryEventBus::new(config.buffer_size))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown bus provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a bus manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn EventBus>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl EventBus for BusManager {
    async fn publish(&self, payload: &str) -> AppResult<()> {
        self.inner.publish(payload).await
    }

    async fn subscribe(&self) -> AppResult<mpsc::Receiver<String>> {
        self.inner.subscribe().await
    }
}
