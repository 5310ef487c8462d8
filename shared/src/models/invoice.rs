//! Invoice Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiscal invoice kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum InvoiceKind {
    A,
    B,
}

impl InvoiceKind {
    /// Canonical string form (matches the DB/wire value)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown invoice kind string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInvoiceKind(pub String);

impl fmt::Display for InvalidInvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid invoice kind: {}", self.0)
    }
}

impl std::error::Error for InvalidInvoiceKind {}

impl std::str::FromStr for InvoiceKind {
    type Err = InvalidInvoiceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(InvalidInvoiceKind(s.to_string())),
        }
    }
}

/// Invoice entity with its line items
///
/// `reservation_id` goes null when the underlying reservation is cancelled;
/// the issued document itself is never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub kind: InvoiceKind,
    pub total: Decimal,
    /// Issue instant, epoch milliseconds
    pub issued_at: i64,
    pub reservation_id: Option<i64>,
    pub items: Vec<InvoiceItem>,
}

/// Invoice line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    pub id: i64,
    pub description: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Manual invoice creation payload (accounting back-office)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCreate {
    pub reservation_id: i64,
    pub total: Decimal,
    /// Issue instant, epoch milliseconds; defaults to now
    pub issued_at: Option<i64>,
    /// "A" or "B"; defaults to "A"
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&InvoiceKind::A).unwrap(), "\"A\"");
        let kind: InvoiceKind = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(kind, InvoiceKind::B);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("A".parse::<InvoiceKind>().unwrap(), InvoiceKind::A);
        assert_eq!("b".parse::<InvoiceKind>().unwrap(), InvoiceKind::B);
        assert!("C".parse::<InvoiceKind>().is_err());
    }

    #[test]
    fn test_invoice_create_payload() {
        let json = r#"{
            "reservation_id": 7,
            "total": 152400.0,
            "issued_at": 1733000000000,
            "kind": "B"
        }"#;
        let payload: InvoiceCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.reservation_id, 7);
        assert_eq!(payload.issued_at, Some(1_733_000_000_000));
        assert_eq!(payload.kind.as_deref(), Some("B"));
    }

    #[test]
    fn test_invoice_create_defaults() {
        let json = r#"{ "reservation_id": 7, "total": 1000.0 }"#;
        let payload: InvoiceCreate = serde_json::from_str(json).unwrap();
        assert!(payload.issued_at.is_none());
        assert!(payload.kind.is_none());
    }
}
