use axum::extract::{Path, State};
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::models::{Room, RoomStatus};

use crate::db;
use crate::state::AppState;

use super::internal;

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn list_rooms(State(state): State<AppState>) -> ApiResult<Vec<Room>> {
    let rooms = db::rooms::list_rooms(&state.pool).await.map_err(internal)?;
    Ok(Json(rooms))
}

pub async fn list_available(State(state): State<AppState>) -> ApiResult<Vec<Room>> {
    let rooms = db::rooms::list_by_status(&state.pool, RoomStatus::Free)
        .await
        .map_err(internal)?;
    Ok(Json(rooms))
}

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> ApiResult<Vec<Room>> {
    let status: RoomStatus = status.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::RoomStatusInvalid,
            format!("Unknown room status: {status}"),
        )
    })?;
    let rooms = db::rooms::list_by_status(&state.pool, status)
        .await
        .map_err(internal)?;
    Ok(Json(rooms))
}
