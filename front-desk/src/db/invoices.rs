//! Invoice read queries

use rust_decimal::Decimal;
use shared::models::{Invoice, InvoiceItem, InvoiceKind};
use sqlx::PgPool;
use std::collections::HashMap;

use super::BoxError;

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: i64,
    kind: InvoiceKind,
    total: Decimal,
    issued_at: i64,
    reservation_id: Option<i64>,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        Invoice {
            id: row.id,
            kind: row.kind,
            total: row.total,
            issued_at: row.issued_at,
            reservation_id: row.reservation_id,
            items: Vec::new(),
        }
    }
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Invoice>, BoxError> {
    let rows: Vec<InvoiceRow> = sqlx::query_as(
        "SELECT id, kind, total, issued_at, reservation_id FROM invoices ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    let mut invoices: Vec<Invoice> = rows.into_iter().map(Invoice::from).collect();
    attach_items(pool, &mut invoices).await?;
    Ok(invoices)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Invoice>, BoxError> {
    let row: Option<InvoiceRow> = sqlx::query_as(
        "SELECT id, kind, total, issued_at, reservation_id FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let mut invoices = vec![Invoice::from(row)];
    attach_items(pool, &mut invoices).await?;
    Ok(invoices.pop())
}

pub async fn list_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Invoice>, BoxError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<InvoiceRow> = sqlx::query_as(
        r#"
        SELECT id, kind, total, issued_at, reservation_id
        FROM invoices
        WHERE id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;
    let mut invoices: Vec<Invoice> = rows.into_iter().map(Invoice::from).collect();
    attach_items(pool, &mut invoices).await?;
    Ok(invoices)
}

/// Load line items for a batch of invoices in one query.
async fn attach_items(pool: &PgPool, invoices: &mut [Invoice]) -> Result<(), BoxError> {
    if invoices.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = invoices.iter().map(|i| i.id).collect();
    let rows: Vec<(i64, i64, String, i32, Decimal, Decimal)> = sqlx::query_as(
        r#"
        SELECT invoice_id, id, description, quantity, unit_price, subtotal
        FROM invoice_items
        WHERE invoice_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut by_invoice: HashMap<i64, Vec<InvoiceItem>> = HashMap::new();
    for (invoice_id, id, description, quantity, unit_price, subtotal) in rows {
        by_invoice.entry(invoice_id).or_default().push(InvoiceItem {
            id,
            description,
            quantity,
            unit_price,
            subtotal,
        });
    }
    for invoice in invoices.iter_mut() {
        if let Some(items) = by_invoice.remove(&invoice.id) {
            invoice.items = items;
        }
    }
    Ok(())
}
