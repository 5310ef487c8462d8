//! Base inventory seeding
//!
//! Creates the fixed room-type catalog and room inventory on first start.
//! Runs on every boot and exits early once data exists.

use rust_decimal::Decimal;
use shared::models::RoomStatus;
use sqlx::PgPool;

use super::BoxError;

/// (name, nightly rate, units, first room number)
const CATALOG: [(&str, i64, i32, i32); 5] = [
    ("Standard Single", 50_800, 10, 101),
    ("Standard Double", 70_230, 18, 201),
    ("Superior Double", 90_560, 8, 301),
    ("Superior Family Plan", 110_500, 10, 401),
    ("Double Suite", 128_600, 2, 501),
];

pub async fn seed_inventory(pool: &PgPool) -> Result<(), BoxError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM room_types")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!("Room inventory already initialized");
        return Ok(());
    }

    tracing::info!("Initializing room inventory...");

    let mut tx = pool.begin().await?;
    for (name, nightly_rate, units, first_number) in CATALOG {
        let (type_id,): (i64,) = sqlx::query_as(
            "INSERT INTO room_types (name, nightly_rate, total_units) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(Decimal::from(nightly_rate))
        .bind(units)
        .fetch_one(&mut *tx)
        .await?;

        for offset in 0..units {
            sqlx::query("INSERT INTO rooms (number, status, room_type_id) VALUES ($1, $2, $3)")
                .bind(first_number + offset)
                .bind(RoomStatus::Free)
                .bind(type_id)
                .execute(&mut *tx)
                .await?;
        }
        tracing::info!("Created {units} rooms of type: {name}");
    }
    tx.commit().await?;

    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    tracing::info!("Inventory initialization complete. Total rooms: {total}");
    Ok(())
}
