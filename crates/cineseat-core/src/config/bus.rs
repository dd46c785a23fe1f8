//! Audit event bus configuration.

use serde::{Deserialize, Serialize};

/// Top-level event bus configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Bus provider: `"memory"` or `"redis"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Name of the single audit channel.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Internal buffer size for in-process delivery.
    #[serde(default = "default_buffer")]
    pub buffer_size: usize,
    /// Redis-specific bus configuration.
    #[serde(default)]
    pub redis: RedisBusConfig,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            channel: default_channel(),
            buffer_size: default_buffer(),
            redis: RedisBusConfig::default(),
        }
    }
}

/// Redis pub/sub backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisBusConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
}

impl Default for RedisBusConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_channel() -> String {
    "booking_events".to_string()
}

fn default_buffer() -> usize {
    256
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}
