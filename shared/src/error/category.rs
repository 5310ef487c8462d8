//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Reservation errors
/// - 5xxx: Invoice errors
/// - 6xxx: Room errors
/// - 7xxx: Guest errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Reservation errors (4xxx)
    Reservation,
    /// Invoice errors (5xxx)
    Invoice,
    /// Room errors (6xxx)
    Room,
    /// Guest errors (7xxx)
    Guest,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Reservation,
            5000..6000 => Self::Invoice,
            6000..7000 => Self::Room,
            7000..8000 => Self::Guest,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Reservation => "reservation",
            Self::Invoice => "invoice",
            Self::Room => "room",
            Self::Guest => "guest",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(4999), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Invoice);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Room);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Guest);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::ReservationNotFound.category(),
            ErrorCategory::Reservation
        );
        assert_eq!(
            ErrorCode::InvoiceAlreadyIssued.category(),
            ErrorCategory::Invoice
        );
        assert_eq!(ErrorCode::RoomNotFound.category(), ErrorCategory::Room);
        assert_eq!(ErrorCode::GuestNotFound.category(), ErrorCategory::Guest);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Reservation.name(), "reservation");
        assert_eq!(ErrorCategory::Invoice.name(), "invoice");
        assert_eq!(ErrorCategory::Room.name(), "room");
        assert_eq!(ErrorCategory::Guest.name(), "guest");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Reservation;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"reservation\"");

        let category: ErrorCategory = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(category, ErrorCategory::Guest);
    }
}
