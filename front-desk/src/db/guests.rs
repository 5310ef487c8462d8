//! Guest registry database operations

use chrono::NaiveDate;
use shared::models::{Address, Guest, GuestCreate, GuestSearchCriteria, GuestStatus, GuestUpdate};
use sqlx::PgPool;

use super::BoxError;

/// Flat guest row with the address LEFT JOINed in
#[derive(sqlx::FromRow)]
struct GuestRow {
    id: i64,
    first_name: String,
    last_name: String,
    document_number: String,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    phone: Option<String>,
    occupation: Option<String>,
    tax_id: Option<String>,
    email: Option<String>,
    status: GuestStatus,
    address_id: Option<i64>,
    street: Option<String>,
    street_number: Option<String>,
    apartment: Option<String>,
    floor: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    province: Option<String>,
    country: Option<String>,
}

impl From<GuestRow> for Guest {
    fn from(row: GuestRow) -> Self {
        let address = row.address_id.map(|id| Address {
            id,
            street: row.street,
            number: row.street_number,
            apartment: row.apartment,
            floor: row.floor,
            postal_code: row.postal_code,
            city: row.city,
            province: row.province,
            country: row.country,
        });
        Guest {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            document_number: row.document_number,
            birth_date: row.birth_date,
            nationality: row.nationality,
            phone: row.phone,
            occupation: row.occupation,
            tax_id: row.tax_id,
            email: row.email,
            address,
            status: row.status,
        }
    }
}

const GUEST_SELECT: &str = r#"
SELECT g.id, g.first_name, g.last_name, g.document_number, g.birth_date,
       g.nationality, g.phone, g.occupation, g.tax_id, g.email, g.status,
       g.address_id, a.street, a.number AS street_number, a.apartment, a.floor,
       a.postal_code, a.city, a.province, a.country
FROM guests g
LEFT JOIN addresses a ON a.id = g.address_id
"#;

pub async fn get_guest(pool: &PgPool, id: i64) -> Result<Option<Guest>, BoxError> {
    let sql = format!("{GUEST_SELECT} WHERE g.id = $1");
    let row: Option<GuestRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.map(Guest::from))
}

/// Register a guest, persisting the nested address first when present.
pub async fn register_guest(pool: &PgPool, data: &GuestCreate) -> Result<Guest, BoxError> {
    let status = data.status.unwrap_or(GuestStatus::Active);
    let mut tx = pool.begin().await?;

    let address_id = match &data.address {
        Some(address) => Some(insert_address(&mut tx, address).await?),
        None => None,
    };

    let (guest_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO guests (
            first_name, last_name, document_number, birth_date, nationality,
            phone, occupation, tax_id, email, address_id, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.document_number)
    .bind(data.birth_date)
    .bind(&data.nationality)
    .bind(&data.phone)
    .bind(&data.occupation)
    .bind(&data.tax_id)
    .bind(&data.email)
    .bind(address_id)
    .bind(status)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    get_guest(pool, guest_id)
        .await?
        .ok_or_else(|| "Guest not found after insert".into())
}

/// Full-field update; returns None when the guest does not exist.
pub async fn update_guest(
    pool: &PgPool,
    id: i64,
    data: &GuestUpdate,
) -> Result<Option<Guest>, BoxError> {
    let mut tx = pool.begin().await?;

    let existing: Option<(Option<i64>,)> =
        sqlx::query_as("SELECT address_id FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((current_address_id,)) = existing else {
        return Ok(None);
    };

    // An address in the payload is stored as a new row, as with registration
    let address_id = match &data.address {
        Some(address) => Some(insert_address(&mut tx, address).await?),
        None => current_address_id,
    };

    sqlx::query(
        r#"
        UPDATE guests SET
            first_name = $1, last_name = $2, document_number = $3,
            birth_date = $4, nationality = $5, phone = $6, occupation = $7,
            tax_id = $8, email = $9, address_id = $10,
            status = COALESCE($11, status)
        WHERE id = $12
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.document_number)
    .bind(data.birth_date)
    .bind(&data.nationality)
    .bind(&data.phone)
    .bind(&data.occupation)
    .bind(&data.tax_id)
    .bind(&data.email)
    .bind(address_id)
    .bind(data.status)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_guest(pool, id).await
}

/// Hard delete; returns whether a row was removed.
pub async fn remove_guest(pool: &PgPool, id: i64) -> Result<bool, BoxError> {
    let result = sqlx::query("DELETE FROM guests WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn search_guests(
    pool: &PgPool,
    criteria: GuestSearchCriteria,
    value: &str,
) -> Result<Vec<Guest>, BoxError> {
    let condition = match criteria {
        GuestSearchCriteria::Document => "g.document_number LIKE '%' || $1 || '%'",
        GuestSearchCriteria::FirstName => "g.first_name ILIKE '%' || $1 || '%'",
        GuestSearchCriteria::LastName => "g.last_name ILIKE '%' || $1 || '%'",
    };
    let sql = format!("{GUEST_SELECT} WHERE {condition} ORDER BY g.id");
    let rows: Vec<GuestRow> = sqlx::query_as(&sql).bind(value).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Guest::from).collect())
}

async fn insert_address(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    address: &shared::models::AddressCreate,
) -> Result<i64, BoxError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO addresses (
            street, number, apartment, floor, postal_code, city, province, country
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(&address.street)
    .bind(&address.number)
    .bind(&address.apartment)
    .bind(&address.floor)
    .bind(&address.postal_code)
    .bind(&address.city)
    .bind(&address.province)
    .bind(&address.country)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}
