//! Booking state guards and stay arithmetic
//!
//! Pure checks shared by the transactional procedures in the parent module.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::RoomStatus;

/// A stay must cover at least one night.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), AppError> {
    if check_out <= check_in {
        return Err(AppError::new(ErrorCode::StayDatesInvalid)
            .with_detail("check_in", check_in.to_string())
            .with_detail("check_out", check_out.to_string()));
    }
    Ok(())
}

/// Only a free room can take a new reservation.
pub fn ensure_reservable(number: i32, status: RoomStatus) -> Result<(), AppError> {
    match status {
        RoomStatus::Free => Ok(()),
        other => Err(AppError::with_message(
            ErrorCode::RoomNotAvailable,
            format!("Room {number} is not available for booking (status: {other})"),
        )),
    }
}

/// Check-in requires the room to be held by a reservation.
pub fn ensure_check_in_allowed(status: RoomStatus) -> Result<(), AppError> {
    match status {
        RoomStatus::Reserved => Ok(()),
        _ => Err(AppError::new(ErrorCode::CheckInNotReserved)),
    }
}

/// A reservation whose room is free or under maintenance is inactive and
/// cannot be invoiced.
pub fn ensure_billable(status: RoomStatus) -> Result<(), AppError> {
    match status {
        RoomStatus::Free | RoomStatus::Maintenance => {
            Err(AppError::new(ErrorCode::ReservationNotBillable))
        }
        RoomStatus::Reserved | RoomStatus::Occupied => Ok(()),
    }
}

/// Cancelling an already-free room means the reservation was released before.
pub fn ensure_cancellable(number: i32, status: RoomStatus) -> Result<(), AppError> {
    match status {
        RoomStatus::Free => Err(AppError::with_message(
            ErrorCode::ReservationAlreadyReleased,
            format!("Room {number} is already free; the reservation may have been cancelled before"),
        )),
        _ => Ok(()),
    }
}

/// Calendar nights between check-in and check-out.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Stay total: nightly rate × number of nights.
pub fn stay_total(nightly_rate: Decimal, nights: i64) -> Decimal {
    nightly_rate * Decimal::from(nights)
}

/// Line-item description for the accommodation charge.
pub fn accommodation_description(room_number: i32) -> String {
    format!("Room {room_number} accommodation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_stay_accepts_forward_range() {
        assert!(validate_stay(date(2025, 3, 1), date(2025, 3, 2)).is_ok());
        assert!(validate_stay(date(2025, 3, 1), date(2025, 3, 15)).is_ok());
        assert!(validate_stay(date(2025, 12, 30), date(2026, 1, 2)).is_ok());
    }

    #[test]
    fn test_validate_stay_rejects_zero_nights() {
        let err = validate_stay(date(2025, 3, 1), date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StayDatesInvalid);
    }

    #[test]
    fn test_validate_stay_rejects_inverted_range() {
        let err = validate_stay(date(2025, 3, 5), date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StayDatesInvalid);
        let details = err.details.unwrap();
        assert_eq!(details.get("check_in").unwrap(), "2025-03-05");
        assert_eq!(details.get("check_out").unwrap(), "2025-03-01");
    }

    #[test]
    fn test_ensure_reservable() {
        assert!(ensure_reservable(101, RoomStatus::Free).is_ok());

        for status in [
            RoomStatus::Reserved,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            let err = ensure_reservable(101, status).unwrap_err();
            assert_eq!(err.code, ErrorCode::RoomNotAvailable);
            assert!(err.message.contains("101"), "message names the room");
        }
    }

    #[test]
    fn test_ensure_check_in_allowed() {
        assert!(ensure_check_in_allowed(RoomStatus::Reserved).is_ok());

        for status in [
            RoomStatus::Free,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            let err = ensure_check_in_allowed(status).unwrap_err();
            assert_eq!(err.code, ErrorCode::CheckInNotReserved);
        }
    }

    #[test]
    fn test_ensure_billable() {
        assert!(ensure_billable(RoomStatus::Reserved).is_ok());
        assert!(ensure_billable(RoomStatus::Occupied).is_ok());

        for status in [RoomStatus::Free, RoomStatus::Maintenance] {
            let err = ensure_billable(status).unwrap_err();
            assert_eq!(err.code, ErrorCode::ReservationNotBillable);
        }
    }

    #[test]
    fn test_ensure_cancellable() {
        for status in [
            RoomStatus::Reserved,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            assert!(ensure_cancellable(204, status).is_ok());
        }

        let err = ensure_cancellable(204, RoomStatus::Free).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationAlreadyReleased);
        assert!(err.message.contains("204"));
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date(2025, 3, 1), date(2025, 3, 2)), 1);
        assert_eq!(nights_between(date(2025, 3, 1), date(2025, 3, 4)), 3);
        // Crosses a month boundary
        assert_eq!(nights_between(date(2025, 1, 30), date(2025, 2, 2)), 3);
    }

    #[test]
    fn test_stay_total() {
        // Standard Double at 70230/night for 3 nights
        let rate = Decimal::from(70_230);
        assert_eq!(stay_total(rate, 3), Decimal::from(210_690));
        assert_eq!(stay_total(rate, 1), rate);
    }

    #[test]
    fn test_accommodation_description() {
        assert_eq!(accommodation_description(101), "Room 101 accommodation");
    }
}
