use axum::extract::{Path, Query, State};
use axum::Json;
use http::StatusCode;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{Invoice, Reservation, ReservationCreate, ReservationUpdate};

use crate::booking;
use crate::db;
use crate::state::AppState;

use super::internal;

type ApiResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
    pub document: String,
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(data): Json<ReservationCreate>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let reservation = booking::create_reservation(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn list_reservations(State(state): State<AppState>) -> ApiResult<Vec<Reservation>> {
    let reservations = db::reservations::list_all(&state.pool)
        .await
        .map_err(internal)?;
    Ok(Json(reservations))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Reservation> {
    let reservation = db::reservations::get(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ReservationNotFound,
                format!("No reservation with id {id}"),
            )
        })?;
    Ok(Json(reservation))
}

pub async fn search_by_guest_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Vec<Reservation>> {
    let reservations = db::reservations::search_by_holder_name(&state.pool, &query.name)
        .await
        .map_err(internal)?;
    Ok(Json(reservations))
}

pub async fn search_by_guest_document(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> ApiResult<Vec<Reservation>> {
    let reservations = db::reservations::search_by_holder_document(&state.pool, &query.document)
        .await
        .map_err(internal)?;
    Ok(Json(reservations))
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Reservation> {
    let reservation = booking::check_in(&state.pool, id).await?;
    Ok(Json(reservation))
}

pub async fn reschedule_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<ReservationUpdate>,
) -> ApiResult<Reservation> {
    let reservation = booking::reschedule(&state.pool, id, &data).await?;
    Ok(Json(reservation))
}

pub async fn issue_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    let invoice = booking::issue_invoice(&state.pool, id).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    booking::cancel_reservation(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
