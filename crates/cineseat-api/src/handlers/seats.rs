//! Seat listing handler.

use axum::Json;
use axum::extract::State;

use cineseat_core::types::SeatView;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /seats — derived status of every known seat.
///
/// Public: observers may browse the floor plan without identity.
pub async fn list_seats(State(state): State<AppState>) -> Result<Json<Vec<SeatView>>, ApiError> {
    let seats = state.reservations.list_seats().await?;
    Ok(Json(seats))
}
