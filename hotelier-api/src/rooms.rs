use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use hotelier_core::models::Room;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/rooms", get(list_rooms))
        .route("/v1/rooms/{id}", get(get_room))
}

async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = state
        .rooms
        .get_all()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(rooms))
}

async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Room>, AppError> {
    let rooms = state
        .rooms
        .get_all()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    rooms
        .into_iter()
        .find(|r| r.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("room {} not found", id)))
}
