//! Claim and confirm handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cineseat_core::error::AppError;
use cineseat_core::types::SeatId;

use crate::dto::request::SeatRequest;
use crate::dto::response::OutcomeResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /lock — claim a seat for the authenticated caller.
///
/// 200 on success, 409 when another holder is active or the seat is already
/// booked, 400 on invalid input, 500 on infrastructure failure.
pub async fn lock_seat(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SeatRequest>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let outcome = state
        .reservations
        .claim(&SeatId::new(req.seat_id), &user.user_id)
        .await?;

    Ok(Json(OutcomeResponse::accepted(outcome.message)))
}

/// POST /confirm — convert the caller's hold into a durable booking.
///
/// 200 on success, 400 when the hold is expired or owned by someone else,
/// 500 on infrastructure failure.
pub async fn confirm_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SeatRequest>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let outcome = state
        .reservations
        .confirm(&SeatId::new(req.seat_id), &user.user_id)
        .await?;

    Ok(Json(OutcomeResponse::accepted(outcome.message)))
}
