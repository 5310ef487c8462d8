//! Reservation Models

use super::guest::GuestSummary;
use super::room::Room;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation entity, returned with its room and holder joined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room: Room,
    /// Guest responsible for the reservation
    pub holder: GuestSummary,
    /// Accompanying guests linked to the stay
    #[serde(default)]
    pub companions: Vec<GuestSummary>,
    pub created_at: i64,
}

/// Create reservation payload
///
/// The room is addressed by number and the holder by document number;
/// presence of each field is validated in the booking service so that the
/// caller gets a domain error code rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub room_number: Option<i32>,
    pub holder_document: Option<String>,
    /// Ids of accompanying guests; unknown ids are ignored
    #[serde(default)]
    pub companions: Vec<i64>,
}

/// Reschedule payload: replaces the stay dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_shape() {
        let json = r#"{
            "check_in": "2025-03-01",
            "check_out": "2025-03-04",
            "room_number": 101,
            "holder_document": "12345678"
        }"#;
        let payload: ReservationCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.room_number, Some(101));
        assert_eq!(payload.holder_document.as_deref(), Some("12345678"));
        assert!(payload.companions.is_empty());
    }

    #[test]
    fn test_create_payload_missing_fields_deserialize() {
        // Field-presence errors are the booking service's job, not serde's
        let payload: ReservationCreate = serde_json::from_str("{}").unwrap();
        assert!(payload.check_in.is_none());
        assert!(payload.room_number.is_none());
        assert!(payload.holder_document.is_none());
    }

    #[test]
    fn test_create_payload_with_companions() {
        let json = r#"{
            "check_in": "2025-03-01",
            "check_out": "2025-03-02",
            "room_number": 201,
            "holder_document": "87654321",
            "companions": [4, 9]
        }"#;
        let payload: ReservationCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.companions, vec![4, 9]);
    }
}
