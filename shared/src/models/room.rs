//! Room and Room Type Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room lifecycle status
///
/// Stored as TEXT in the database and serialized in SCREAMING_SNAKE_CASE on
/// the wire, so the DB value and the JSON value coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoomStatus {
    /// Available for booking
    Free,
    /// Held by a reservation, guest not yet arrived
    Reserved,
    /// Guest checked in
    Occupied,
    /// Out of service
    Maintenance,
}

impl RoomStatus {
    /// Canonical string form (matches the DB/wire value)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Reserved => "RESERVED",
            Self::Occupied => "OCCUPIED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown room status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomStatus(pub String);

impl fmt::Display for InvalidRoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room status: {}", self.0)
    }
}

impl std::error::Error for InvalidRoomStatus {}

impl std::str::FromStr for RoomStatus {
    type Err = InvalidRoomStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FREE" => Ok(Self::Free),
            "RESERVED" => Ok(Self::Reserved),
            "OCCUPIED" => Ok(Self::Occupied),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err(InvalidRoomStatus(s.to_string())),
        }
    }
}

/// Room category with its nightly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    pub nightly_rate: Decimal,
    pub total_units: i32,
}

/// Room entity, returned with its type joined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub number: i32,
    pub status: RoomStatus,
    pub room_type: RoomType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&RoomStatus::Free).unwrap(),
            "\"FREE\""
        );
        assert_eq!(
            serde_json::to_string(&RoomStatus::Maintenance).unwrap(),
            "\"MAINTENANCE\""
        );

        let status: RoomStatus = serde_json::from_str("\"OCCUPIED\"").unwrap();
        assert_eq!(status, RoomStatus::Occupied);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("FREE".parse::<RoomStatus>().unwrap(), RoomStatus::Free);
        assert_eq!(
            "reserved".parse::<RoomStatus>().unwrap(),
            RoomStatus::Reserved
        );
        assert_eq!(
            "Maintenance".parse::<RoomStatus>().unwrap(),
            RoomStatus::Maintenance
        );
        assert!("VACANT".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_status_display_matches_parse() {
        for status in [
            RoomStatus::Free,
            RoomStatus::Reserved,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            let parsed: RoomStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
