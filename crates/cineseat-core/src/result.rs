//! Convenience result type alias for CineSeat.

use crate::error::AppError;

/// A specialized `Result` type for CineSeat operations.
///
/// Defined so that every crate does not need to spell out
/// `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
