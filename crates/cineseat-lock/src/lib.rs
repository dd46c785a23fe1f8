//! # cineseat-lock
//!
//! Seat lock store providers for CineSeat: a Redis backend for multi-node
//! deployments and an in-memory backend for single-node use and tests, both
//! behind the [`cineseat_core::traits::SeatLockStore`] trait.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

#[cfg(feature = "memory")]
pub use memory::MemoryLockStore;
pub use provider::LockManager;
#[cfg(feature = "redis-backend")]
pub use redis::RedisLockStore;
