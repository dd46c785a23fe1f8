//! Real-time observer configuration.

use serde::{Deserialize, Serialize};

/// Settings for the WebSocket observer registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbound buffer size; a full buffer drops the update
    /// for that observer rather than blocking the broadcaster.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
        }
    }
}

fn default_channel_buffer() -> usize {
    64
}
