//! # cineseat-database
//!
//! PostgreSQL persistence for CineSeat: the booking store (durable,
//! immutable booking records) and the audit store (the durable side of the
//! advisory audit trail), plus connection pool and migration plumbing.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use repositories::audit::PgAuditStore;
pub use repositories::booking::PgBookingStore;
