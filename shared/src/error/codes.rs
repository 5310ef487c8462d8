//! Unified error codes for the front-desk service
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 5xxx: Invoice errors
//! - 6xxx: Room errors
//! - 7xxx: Guest errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Room is not available for booking
    RoomNotAvailable = 4002,
    /// Cannot check in a room that is not reserved
    CheckInNotReserved = 4003,
    /// Cannot invoice an inactive reservation
    ReservationNotBillable = 4004,
    /// Room is already free; reservation may have been cancelled before
    ReservationAlreadyReleased = 4005,
    /// Check-in and check-out dates are required
    StayDatesRequired = 4006,
    /// Check-out date must be after check-in date
    StayDatesInvalid = 4007,

    // ==================== 5xxx: Invoice ====================
    /// Invoice not found
    InvoiceNotFound = 5001,
    /// Reservation already has an invoice
    InvoiceAlreadyIssued = 5002,
    /// Invalid invoice kind
    InvoiceKindInvalid = 5003,

    // ==================== 6xxx: Room ====================
    /// Room not found
    RoomNotFound = 6001,
    /// Room number is required
    RoomNumberRequired = 6002,
    /// Invalid room status
    RoomStatusInvalid = 6003,

    // ==================== 7xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 7001,
    /// Guest document number is required
    GuestDocumentRequired = 7002,
    /// Invalid guest search criteria
    SearchCriteriaInvalid = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::RoomNotAvailable => "Room is not available for booking",
            ErrorCode::CheckInNotReserved => "Cannot check in a room that is not reserved",
            ErrorCode::ReservationNotBillable => "Cannot invoice an inactive reservation",
            ErrorCode::ReservationAlreadyReleased => {
                "Room is already free; the reservation may have been cancelled before"
            }
            ErrorCode::StayDatesRequired => "Check-in and check-out dates are required",
            ErrorCode::StayDatesInvalid => "Check-out date must be after check-in date",

            // Invoice
            ErrorCode::InvoiceNotFound => "Invoice not found",
            ErrorCode::InvoiceAlreadyIssued => "Reservation already has an invoice",
            ErrorCode::InvoiceKindInvalid => "Invalid invoice kind",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNumberRequired => "Room number is required",
            ErrorCode::RoomStatusInvalid => "Invalid room status",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestDocumentRequired => "Guest document number is required",
            ErrorCode::SearchCriteriaInvalid => {
                "Search criteria must be 'document', 'first_name' or 'last_name'"
            }

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::RoomNotAvailable),
            4003 => Ok(ErrorCode::CheckInNotReserved),
            4004 => Ok(ErrorCode::ReservationNotBillable),
            4005 => Ok(ErrorCode::ReservationAlreadyReleased),
            4006 => Ok(ErrorCode::StayDatesRequired),
            4007 => Ok(ErrorCode::StayDatesInvalid),

            // Invoice
            5001 => Ok(ErrorCode::InvoiceNotFound),
            5002 => Ok(ErrorCode::InvoiceAlreadyIssued),
            5003 => Ok(ErrorCode::InvoiceKindInvalid),

            // Room
            6001 => Ok(ErrorCode::RoomNotFound),
            6002 => Ok(ErrorCode::RoomNumberRequired),
            6003 => Ok(ErrorCode::RoomStatusInvalid),

            // Guest
            7001 => Ok(ErrorCode::GuestNotFound),
            7002 => Ok(ErrorCode::GuestDocumentRequired),
            7003 => Ok(ErrorCode::SearchCriteriaInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);

        // Reservation
        assert_eq!(ErrorCode::ReservationNotFound.code(), 4001);
        assert_eq!(ErrorCode::RoomNotAvailable.code(), 4002);
        assert_eq!(ErrorCode::CheckInNotReserved.code(), 4003);
        assert_eq!(ErrorCode::ReservationNotBillable.code(), 4004);
        assert_eq!(ErrorCode::ReservationAlreadyReleased.code(), 4005);
        assert_eq!(ErrorCode::StayDatesRequired.code(), 4006);
        assert_eq!(ErrorCode::StayDatesInvalid.code(), 4007);

        // Invoice
        assert_eq!(ErrorCode::InvoiceNotFound.code(), 5001);
        assert_eq!(ErrorCode::InvoiceAlreadyIssued.code(), 5002);
        assert_eq!(ErrorCode::InvoiceKindInvalid.code(), 5003);

        // Room
        assert_eq!(ErrorCode::RoomNotFound.code(), 6001);
        assert_eq!(ErrorCode::RoomNumberRequired.code(), 6002);
        assert_eq!(ErrorCode::RoomStatusInvalid.code(), 6003);

        // Guest
        assert_eq!(ErrorCode::GuestNotFound.code(), 7001);
        assert_eq!(ErrorCode::GuestDocumentRequired.code(), 7002);
        assert_eq!(ErrorCode::SearchCriteriaInvalid.code(), 7003);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::ReservationNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::ReservationNotFound));
        assert_eq!(ErrorCode::try_from(5002), Ok(ErrorCode::InvoiceAlreadyIssued));
        assert_eq!(ErrorCode::try_from(6001), Ok(ErrorCode::RoomNotFound));
        assert_eq!(ErrorCode::try_from(7001), Ok(ErrorCode::GuestNotFound));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4100), Err(InvalidErrorCode(4100)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::ReservationNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::RoomNotAvailable);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ReservationNotFound,
            ErrorCode::RoomNotAvailable,
            ErrorCode::InvoiceAlreadyIssued,
            ErrorCode::GuestNotFound,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::ReservationNotFound), "4001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(
            ErrorCode::ReservationNotFound.message(),
            "Reservation not found"
        );
        assert_eq!(
            ErrorCode::RoomNotAvailable.message(),
            "Room is not available for booking"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
