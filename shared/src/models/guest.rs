//! Guest Registry Models

use super::address::{Address, AddressCreate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest registry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum GuestStatus {
    Active,
    Inactive,
}

/// Guest entity with its address joined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub status: GuestStatus,
}

/// Abbreviated guest shape embedded in reservations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GuestSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
}

/// Register guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressCreate>,
    /// Defaults to Active when unset
    pub status: Option<GuestStatus>,
}

/// Update guest payload
///
/// Name and document fields are replaced wholesale; optional fields are
/// overwritten with whatever is provided (including clearing them). Status
/// changes only when a value is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestUpdate {
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressCreate>,
    pub status: Option<GuestStatus>,
}

/// Guest search request: criteria + value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSearchRequest {
    pub criteria: String,
    pub value: String,
}

/// Supported guest search fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestSearchCriteria {
    Document,
    FirstName,
    LastName,
}

/// Error when parsing an unknown search criteria string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSearchCriteria(pub String);

impl fmt::Display for InvalidSearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid search criteria: {}", self.0)
    }
}

impl std::error::Error for InvalidSearchCriteria {}

impl std::str::FromStr for GuestSearchCriteria {
    type Err = InvalidSearchCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            _ => Err(InvalidSearchCriteria(s.to_string())),
        }
    }
}
