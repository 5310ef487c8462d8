//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::ReservationNotFound
            | Self::InvoiceNotFound
            | Self::RoomNotFound
            | Self::GuestNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::CheckInNotReserved
            | Self::InvoiceAlreadyIssued
            | Self::ReservationAlreadyReleased => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ReservationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::RoomNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::GuestNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::InvoiceNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::CheckInNotReserved.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InvoiceAlreadyIssued.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::ReservationAlreadyReleased.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::RoomNotAvailable.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::StayDatesInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ReservationNotBillable.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::SearchCriteriaInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
