//! Address Model

use serde::{Deserialize, Serialize};

/// Postal address linked to a guest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Address {
    pub id: i64,
    pub street: Option<String>,
    pub number: Option<String>,
    pub apartment: Option<String>,
    pub floor: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

/// Create address payload (nested in guest registration/update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressCreate {
    pub street: Option<String>,
    pub number: Option<String>,
    pub apartment: Option<String>,
    pub floor: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}
