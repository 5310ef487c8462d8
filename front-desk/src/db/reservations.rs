//! Reservation read queries
//!
//! All shapes come back with the room (and its type) and the holder joined,
//! matching what the console renders in its listings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{GuestSummary, Reservation, Room, RoomStatus, RoomType};
use sqlx::PgPool;
use std::collections::HashMap;

use super::BoxError;

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    created_at: i64,
    room_number: i32,
    room_status: RoomStatus,
    type_id: i64,
    type_name: String,
    nightly_rate: Decimal,
    total_units: i32,
    holder_id: i64,
    holder_first_name: String,
    holder_last_name: String,
    holder_document: String,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            check_in: row.check_in,
            check_out: row.check_out,
            room: Room {
                number: row.room_number,
                status: row.room_status,
                room_type: RoomType {
                    id: row.type_id,
                    name: row.type_name,
                    nightly_rate: row.nightly_rate,
                    total_units: row.total_units,
                },
            },
            holder: GuestSummary {
                id: row.holder_id,
                first_name: row.holder_first_name,
                last_name: row.holder_last_name,
                document_number: row.holder_document,
            },
            companions: Vec::new(),
            created_at: row.created_at,
        }
    }
}

const RESERVATION_SELECT: &str = r#"
SELECT r.id, r.check_in, r.check_out, r.created_at,
       rm.number AS room_number, rm.status AS room_status,
       t.id AS type_id, t.name AS type_name, t.nightly_rate, t.total_units,
       g.id AS holder_id, g.first_name AS holder_first_name,
       g.last_name AS holder_last_name, g.document_number AS holder_document
FROM reservations r
JOIN rooms rm ON rm.number = r.room_number
JOIN room_types t ON t.id = rm.room_type_id
JOIN guests g ON g.id = r.holder_id
"#;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Reservation>, BoxError> {
    let sql = format!("{RESERVATION_SELECT} ORDER BY r.id");
    let rows: Vec<ReservationRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
    let mut reservations: Vec<Reservation> = rows.into_iter().map(Reservation::from).collect();
    attach_companions(pool, &mut reservations).await?;
    Ok(reservations)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Reservation>, BoxError> {
    let sql = format!("{RESERVATION_SELECT} WHERE r.id = $1");
    let row: Option<ReservationRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let mut reservations = vec![Reservation::from(row)];
    attach_companions(pool, &mut reservations).await?;
    Ok(reservations.pop())
}

/// Reservations whose holder's first or last name contains the fragment.
pub async fn search_by_holder_name(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<Reservation>, BoxError> {
    let sql = format!(
        "{RESERVATION_SELECT} \
         WHERE g.first_name ILIKE '%' || $1 || '%' \
            OR g.last_name ILIKE '%' || $1 || '%' \
         ORDER BY r.id"
    );
    let rows: Vec<ReservationRow> = sqlx::query_as(&sql).bind(name).fetch_all(pool).await?;
    let mut reservations: Vec<Reservation> = rows.into_iter().map(Reservation::from).collect();
    attach_companions(pool, &mut reservations).await?;
    Ok(reservations)
}

/// Reservations whose holder has exactly this document number.
pub async fn search_by_holder_document(
    pool: &PgPool,
    document: &str,
) -> Result<Vec<Reservation>, BoxError> {
    let sql = format!("{RESERVATION_SELECT} WHERE g.document_number = $1 ORDER BY r.id");
    let rows: Vec<ReservationRow> = sqlx::query_as(&sql).bind(document).fetch_all(pool).await?;
    let mut reservations: Vec<Reservation> = rows.into_iter().map(Reservation::from).collect();
    attach_companions(pool, &mut reservations).await?;
    Ok(reservations)
}

/// Load companion links for a batch of reservations in one query.
async fn attach_companions(
    pool: &PgPool,
    reservations: &mut [Reservation],
) -> Result<(), BoxError> {
    if reservations.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = reservations.iter().map(|r| r.id).collect();
    let rows: Vec<(i64, i64, String, String, String)> = sqlx::query_as(
        r#"
        SELECT rg.reservation_id, g.id, g.first_name, g.last_name, g.document_number
        FROM reservation_guests rg
        JOIN guests g ON g.id = rg.guest_id
        WHERE rg.reservation_id = ANY($1)
        ORDER BY g.id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut by_reservation: HashMap<i64, Vec<GuestSummary>> = HashMap::new();
    for (reservation_id, id, first_name, last_name, document_number) in rows {
        by_reservation
            .entry(reservation_id)
            .or_default()
            .push(GuestSummary {
                id,
                first_name,
                last_name,
                document_number,
            });
    }
    for reservation in reservations.iter_mut() {
        if let Some(companions) = by_reservation.remove(&reservation.id) {
            reservation.companions = companions;
        }
    }
    Ok(())
}
