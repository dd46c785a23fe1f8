//! # cineseat-service
//!
//! The reservation coordinator (lock acquisition, expiry watchers,
//! confirmation, persistence, and the broadcast/audit side effects of every
//! transition) plus the read-only audit query service.

pub mod audit;
pub mod reservation;

pub use audit::AuditQueryService;
pub use reservation::{ReservationOutcome, ReservationService};
