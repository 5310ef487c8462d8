//! Reservation lifecycle service
//!
//! The state-transition procedures of the booking workflow: reserve,
//! check-in, reschedule, invoice, cancel, plus manual invoice entry for the
//! accounting back-office. Each write runs in a single transaction and locks
//! the room row for the duration of its status transition.

pub mod policy;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use shared::error::{AppError, ErrorCode};
use shared::models::{
    Invoice, InvoiceCreate, InvoiceKind, Reservation, ReservationCreate, ReservationUpdate,
    RoomStatus,
};

use crate::db;
use crate::error::{ServiceError, ServiceResult};

/// Create a reservation: the room (by number) must be free and the holder
/// (by document number) must already be registered. The room moves
/// `Free → Reserved` in the same transaction.
pub async fn create_reservation(
    pool: &PgPool,
    req: &ReservationCreate,
) -> ServiceResult<Reservation> {
    let (check_in, check_out) = match (req.check_in, req.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(AppError::new(ErrorCode::StayDatesRequired).into()),
    };
    policy::validate_stay(check_in, check_out)?;

    let room_number = req
        .room_number
        .ok_or_else(|| AppError::new(ErrorCode::RoomNumberRequired))?;
    let document = match req.holder_document.as_deref() {
        Some(document) if !document.is_empty() => document,
        _ => return Err(AppError::new(ErrorCode::GuestDocumentRequired).into()),
    };

    let mut tx = pool.begin().await?;

    let room: Option<(RoomStatus,)> =
        sqlx::query_as("SELECT status FROM rooms WHERE number = $1 FOR UPDATE")
            .bind(room_number)
            .fetch_optional(&mut *tx)
            .await?;
    let (status,) = room.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::RoomNotFound,
            format!("No room with number {room_number}"),
        )
    })?;
    policy::ensure_reservable(room_number, status)?;

    // First registered guest matching the document becomes the holder
    let holder: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM guests WHERE document_number LIKE '%' || $1 || '%' ORDER BY id LIMIT 1",
    )
    .bind(document)
    .fetch_optional(&mut *tx)
    .await?;
    let (holder_id,) = holder.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::GuestNotFound,
            format!("No guest with document {document}"),
        )
    })?;

    sqlx::query("UPDATE rooms SET status = $1 WHERE number = $2")
        .bind(RoomStatus::Reserved)
        .bind(room_number)
        .execute(&mut *tx)
        .await?;

    let (reservation_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO reservations (check_in, check_out, room_number, holder_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(check_in)
    .bind(check_out)
    .bind(room_number)
    .bind(holder_id)
    .bind(shared::util::now_millis())
    .fetch_one(&mut *tx)
    .await?;

    if !req.companions.is_empty() {
        // Unknown guest ids are silently skipped
        sqlx::query(
            r#"
            INSERT INTO reservation_guests (reservation_id, guest_id)
            SELECT $1, id FROM guests WHERE id = ANY($2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(reservation_id)
        .bind(&req.companions)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    load_reservation(pool, reservation_id).await
}

/// Check a reservation in: its room must currently be `Reserved` and moves
/// to `Occupied`.
pub async fn check_in(pool: &PgPool, reservation_id: i64) -> ServiceResult<Reservation> {
    let mut tx = pool.begin().await?;

    let row: Option<(i32,)> = sqlx::query_as("SELECT room_number FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await?;
    let (room_number,) = row.ok_or_else(|| reservation_not_found(reservation_id))?;

    let room: Option<(RoomStatus,)> =
        sqlx::query_as("SELECT status FROM rooms WHERE number = $1 FOR UPDATE")
            .bind(room_number)
            .fetch_optional(&mut *tx)
            .await?;
    let (status,) = room.ok_or_else(|| AppError::new(ErrorCode::RoomNotFound))?;
    policy::ensure_check_in_allowed(status)?;

    sqlx::query("UPDATE rooms SET status = $1 WHERE number = $2")
        .bind(RoomStatus::Occupied)
        .bind(room_number)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    load_reservation(pool, reservation_id).await
}

/// Replace the stay dates of an existing reservation.
pub async fn reschedule(
    pool: &PgPool,
    reservation_id: i64,
    req: &ReservationUpdate,
) -> ServiceResult<Reservation> {
    let (check_in, check_out) = match (req.check_in, req.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(AppError::new(ErrorCode::StayDatesRequired).into()),
    };
    policy::validate_stay(check_in, check_out)?;

    let result = sqlx::query("UPDATE reservations SET check_in = $1, check_out = $2 WHERE id = $3")
        .bind(check_in)
        .bind(check_out)
        .bind(reservation_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(reservation_not_found(reservation_id).into());
    }

    load_reservation(pool, reservation_id).await
}

/// Issue the stay invoice for a reservation: kind B, one accommodation line
/// of nightly rate × nights. At most one invoice per reservation.
pub async fn issue_invoice(pool: &PgPool, reservation_id: i64) -> ServiceResult<Invoice> {
    let mut tx = pool.begin().await?;

    let row: Option<(NaiveDate, NaiveDate, i32, RoomStatus, Decimal)> = sqlx::query_as(
        r#"
        SELECT r.check_in, r.check_out, r.room_number, rm.status, t.nightly_rate
        FROM reservations r
        JOIN rooms rm ON rm.number = r.room_number
        JOIN room_types t ON t.id = rm.room_type_id
        WHERE r.id = $1
        FOR UPDATE OF r
        "#,
    )
    .bind(reservation_id)
    .fetch_optional(&mut *tx)
    .await?;
    let (check_in, check_out, room_number, status, nightly_rate) =
        row.ok_or_else(|| reservation_not_found(reservation_id))?;

    policy::ensure_billable(status)?;
    ensure_not_invoiced(&mut tx, reservation_id).await?;

    let nights = policy::nights_between(check_in, check_out);
    let total = policy::stay_total(nightly_rate, nights);

    let (invoice_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO invoices (kind, total, issued_at, reservation_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(InvoiceKind::B)
    .bind(total)
    .bind(shared::util::now_millis())
    .bind(reservation_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO invoice_items (invoice_id, description, quantity, unit_price, subtotal)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(invoice_id)
    .bind(policy::accommodation_description(room_number))
    .bind(nights as i32)
    .bind(nightly_rate)
    .bind(total)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    load_invoice(pool, invoice_id).await
}

/// Cancel a reservation: frees the room and deletes the reservation row.
/// Companion links cascade; an issued invoice keeps its amounts and loses
/// only the reservation link.
pub async fn cancel_reservation(pool: &PgPool, reservation_id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let row: Option<(i32,)> = sqlx::query_as("SELECT room_number FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await?;
    let (room_number,) = row.ok_or_else(|| reservation_not_found(reservation_id))?;

    let room: Option<(RoomStatus,)> =
        sqlx::query_as("SELECT status FROM rooms WHERE number = $1 FOR UPDATE")
            .bind(room_number)
            .fetch_optional(&mut *tx)
            .await?;
    let (status,) = room.ok_or_else(|| AppError::new(ErrorCode::RoomNotFound))?;
    policy::ensure_cancellable(room_number, status)?;

    sqlx::query("UPDATE rooms SET status = $1 WHERE number = $2")
        .bind(RoomStatus::Free)
        .bind(room_number)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Manual invoice entry (accounting back-office). The whole batch commits or
/// rolls back together.
pub async fn create_manual_invoices(
    pool: &PgPool,
    requests: &[InvoiceCreate],
) -> ServiceResult<Vec<Invoice>> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(requests.len());

    for req in requests {
        let kind = match req.kind.as_deref() {
            Some(kind) => kind.parse::<InvoiceKind>().map_err(|e| {
                AppError::with_message(ErrorCode::InvoiceKindInvalid, e.to_string())
            })?,
            None => InvoiceKind::A,
        };

        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM reservations WHERE id = $1")
            .bind(req.reservation_id)
            .fetch_optional(&mut *tx)
            .await?;
        exists.ok_or_else(|| reservation_not_found(req.reservation_id))?;

        ensure_not_invoiced(&mut tx, req.reservation_id).await?;

        let issued_at = req.issued_at.unwrap_or_else(shared::util::now_millis);
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO invoices (kind, total, issued_at, reservation_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(kind)
        .bind(req.total)
        .bind(issued_at)
        .bind(req.reservation_id)
        .fetch_one(&mut *tx)
        .await?;
        ids.push(id);
    }

    tx.commit().await?;

    Ok(db::invoices::list_by_ids(pool, &ids).await?)
}

fn reservation_not_found(reservation_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ReservationNotFound,
        format!("No reservation with id {reservation_id}"),
    )
}

async fn ensure_not_invoiced(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    reservation_id: i64,
) -> ServiceResult<()> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM invoices WHERE reservation_id = $1")
            .bind(reservation_id)
            .fetch_optional(&mut **tx)
            .await?;
    match existing {
        Some((invoice_id,)) => Err(ServiceError::App(
            AppError::new(ErrorCode::InvoiceAlreadyIssued).with_detail("invoice_id", invoice_id),
        )),
        None => Ok(()),
    }
}

async fn load_reservation(pool: &PgPool, id: i64) -> ServiceResult<Reservation> {
    db::reservations::get(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound).into())
}

async fn load_invoice(pool: &PgPool, id: i64) -> ServiceResult<Invoice> {
    db::invoices::get(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).into())
}
