use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use hotelier_core::models::{Booking, BookingDraft};

use crate::error::{engine_error, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct OccupancyParams {
    start: NaiveDate,
    end: NaiveDate,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings).post(create_booking))
        .route("/v1/bookings/fully-occupied", get(fully_occupied_dates))
}

async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .bookings
        .get_all()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<impl IntoResponse, AppError> {
    match state
        .manager
        .create_booking(draft)
        .await
        .map_err(engine_error)?
    {
        Some(booking) => {
            info!(booking_id = booking.id, room_id = booking.room_id, "booking created");
            Ok((StatusCode::CREATED, Json(booking)))
        }
        None => Err(AppError::ConflictError(
            "no room available for the requested dates".to_string(),
        )),
    }
}

async fn fully_occupied_dates(
    State(state): State<AppState>,
    Query(params): Query<OccupancyParams>,
) -> Result<Json<Vec<NaiveDate>>, AppError> {
    let dates = state
        .manager
        .get_fully_occupied_dates(params.start, params.end)
        .await
        .map_err(engine_error)?;
    Ok(Json(dates))
}
