use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{Guest, GuestCreate, GuestSearchCriteria, GuestSearchRequest, GuestUpdate};

use crate::db;
use crate::state::AppState;

use super::internal;

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn register_guest(
    State(state): State<AppState>,
    Json(data): Json<GuestCreate>,
) -> Result<(StatusCode, Json<Guest>), AppError> {
    let guest = db::guests::register_guest(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok((StatusCode::CREATED, Json(guest)))
}

pub async fn search_guests(
    State(state): State<AppState>,
    Json(req): Json<GuestSearchRequest>,
) -> ApiResult<Vec<Guest>> {
    let criteria: GuestSearchCriteria = req.criteria.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::SearchCriteriaInvalid,
            format!("Unknown search criteria: {}", req.criteria),
        )
    })?;
    let guests = db::guests::search_guests(&state.pool, criteria, &req.value)
        .await
        .map_err(internal)?;
    Ok(Json(guests))
}

pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<GuestUpdate>,
) -> ApiResult<Guest> {
    let guest = db::guests::update_guest(&state.pool, id, &data)
        .await
        .map_err(internal)?
        .ok_or_else(|| guest_not_found(id))?;
    Ok(Json(guest))
}

pub async fn remove_guest(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed = db::guests::remove_guest(&state.pool, id)
        .await
        .map_err(internal)?;
    if !removed {
        return Err(guest_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn guest_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::GuestNotFound, format!("No guest with id {id}"))
}
