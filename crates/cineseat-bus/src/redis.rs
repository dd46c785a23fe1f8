//! Redis pub/sub event bus for multi-node deployments.

use async_trait::async_trait;
use futures::StreamExt;
use redis::aio::ConnectionManager;
use tokio::sync::mpsc;
use tracing::{info, warn};

use cineseat_core::config::bus::BusConfig;
use cineseat_core::error::{AppError, ErrorKind};
use cineseat_core::result::AppResult;
use cineseat_core::traits::EventBus;

/// Redis-backed event bus.
///
/// Publishing goes through the shared connection manager; each subscription
/// holds its own pub/sub connection whose message stream is forwarded into
/// an mpsc receiver.
#[derive(Debug, Clone)]
pub struct RedisEventBus {
    client: redis::Client,
    conn: ConnectionManager,
    channel: String,
    buffer_size: usize,
}

impl RedisEventBus {
    /// Connect a new Redis event bus from configuration.
    pub async fn connect(config: &BusConfig) -> AppResult<Self> {
        let client = redis::Client::open(config.redis.url.as_str()).map_err(|e| {
            AppError::with_source(ErrorKind::Bus, "Failed to create Redis client", e)
        })?;

        let conn = ConnectionManager::new(client.clone()).await.map_err(|e| {
            AppError::with_source(ErrorKind::Bus, "Failed to connect to Redis", e)
        })?;

        info!(channel = %config.channel, "Connected Redis event bus");
        Ok(Self {
            client,
            conn,
            channel: config.channel.clone(),
            buffer_size: config.buffer_size.max(1),
        })
    }

    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Bus, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl EventBus for RedisEventBus {
    async fn publish(&self, payload: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PUBLISH")
            .arg(&self.channel)
            .arg(payload)
            .query_async::<i64>(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn subscribe(&self) -> AppResult<mpsc::Receiver<String>> {
        let mut pubsub = self
            .client
            .get_async_pubsub()
            .await
            .map_err(Self::map_err)?;
        pubsub
            .subscribe(&self.channel)
            .await
            .map_err(Self::map_err)?;

        let (tx, rx) = mpsc::channel(self.buffer_size);
        let channel = self.channel.clone();

        tokio::spawn(async move {
            let mut stream = pubsub.on_message();
            while let Some(msg) = stream.next().await {
                let payload: String = match msg.get_payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!(channel = %channel, error = %e, "Undecodable bus payload dropped");
                        continue;
                    }
                };
                if tx.send(payload).await.is_err() {
                    break;
                }
            }
            info!(channel = %channel, "Redis bus subscription closed");
        });

        Ok(rx)
    }
}
