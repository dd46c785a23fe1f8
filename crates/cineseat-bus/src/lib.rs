//! # cineseat-bus
//!
//! The internal audit event bus: a single named channel with at-most-once,
//! non-durable delivery, plus the audit recorder, the bus's sole consumer,
//! which persists every delivered event into the audit store.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod recorder;
#[cfg(feature = "redis-backend")]
pub mod redis;

#[cfg(feature = "memory")]
pub use memory::MemoryEventBus;
pub use provider::BusManager;
pub use recorder::AuditRecorder;
#[cfg(feature = "redis-backend")]
pub use redis::RedisEventBus;
