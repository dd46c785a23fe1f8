//! # cineseat-api
//!
//! The HTTP/WebSocket surface of CineSeat: axum router, handlers, trusted
//! identity extractors, request/response DTOs, and the mapping from the
//! unified error type onto HTTP statuses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
