use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{Invoice, InvoiceCreate};

use crate::booking;
use crate::db;
use crate::state::AppState;

use super::internal;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Manual invoice entry: accepts a batch, all-or-nothing.
pub async fn create_invoices(
    State(state): State<AppState>,
    Json(requests): Json<Vec<InvoiceCreate>>,
) -> Result<(StatusCode, Json<Vec<Invoice>>), AppError> {
    let invoices = booking::create_manual_invoices(&state.pool, &requests).await?;
    Ok((StatusCode::CREATED, Json(invoices)))
}

pub async fn list_invoices(State(state): State<AppState>) -> ApiResult<Vec<Invoice>> {
    let invoices = db::invoices::list_all(&state.pool).await.map_err(internal)?;
    Ok(Json(invoices))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Invoice> {
    let invoice = db::invoices::get(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvoiceNotFound,
                format!("No invoice with id {id}"),
            )
        })?;
    Ok(Json(invoice))
}
