//! Room inventory queries

use rust_decimal::Decimal;
use shared::models::{Room, RoomStatus, RoomType};
use sqlx::PgPool;

use super::BoxError;

type RoomRow = (i32, RoomStatus, i64, String, Decimal, i32);

fn room_from_row((number, status, id, name, nightly_rate, total_units): RoomRow) -> Room {
    Room {
        number,
        status,
        room_type: RoomType {
            id,
            name,
            nightly_rate,
            total_units,
        },
    }
}

pub async fn list_rooms(pool: &PgPool) -> Result<Vec<Room>, BoxError> {
    let rows: Vec<RoomRow> = sqlx::query_as(
        r#"
        SELECT r.number, r.status, t.id, t.name, t.nightly_rate, t.total_units
        FROM rooms r
        JOIN room_types t ON t.id = r.room_type_id
        ORDER BY r.number
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(room_from_row).collect())
}

pub async fn list_by_status(pool: &PgPool, status: RoomStatus) -> Result<Vec<Room>, BoxError> {
    let rows: Vec<RoomRow> = sqlx::query_as(
        r#"
        SELECT r.number, r.status, t.id, t.name, t.nightly_rate, t.total_units
        FROM rooms r
        JOIN room_types t ON t.id = r.room_type_id
        WHERE r.status = $1
        ORDER BY r.number
        "#,
    )
    .bind(status)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(room_from_row).collect())
}
