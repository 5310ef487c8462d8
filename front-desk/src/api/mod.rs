//! API routes for front-desk

pub mod guests;
pub mod health;
pub mod invoices;
pub mod reservations;
pub mod rooms;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Query error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let rooms = Router::new()
        .route("/api/rooms", get(rooms::list_rooms))
        .route("/api/rooms/available", get(rooms::list_available))
        .route("/api/rooms/status/{status}", get(rooms::list_by_status));

    let guests = Router::new()
        .route("/api/guests", post(guests::register_guest))
        .route("/api/guests/search", post(guests::search_guests))
        .route(
            "/api/guests/{id}",
            put(guests::update_guest).delete(guests::remove_guest),
        );

    let reservations = Router::new()
        .route(
            "/api/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/api/reservations/search",
            get(reservations::search_by_guest_name),
        )
        .route(
            "/api/reservations/by-document",
            get(reservations::search_by_guest_document),
        )
        .route(
            "/api/reservations/{id}",
            get(reservations::get_reservation)
                .put(reservations::reschedule_reservation)
                .delete(reservations::cancel_reservation),
        )
        .route(
            "/api/reservations/{id}/check-in",
            post(reservations::check_in),
        )
        .route(
            "/api/reservations/{id}/invoice",
            post(reservations::issue_invoice),
        );

    let invoices = Router::new()
        .route(
            "/api/invoices",
            get(invoices::list_invoices).post(invoices::create_invoices),
        )
        .route("/api/invoices/{id}", get(invoices::get_invoice));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(rooms)
        .merge(guests)
        .merge(reservations)
        .merge(invoices)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
