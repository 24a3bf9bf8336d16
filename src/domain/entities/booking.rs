//! Reservation of a room for a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::room::{RoomId, RoomType};

/// Numeric identifier of a booking.
pub type BookingId = u32;

/// Guest reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub room_number: String,
    pub capacity: u8,
    pub floor: u8,
    pub beds: u8,
    pub price: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RoomType,
}

impl Booking {
    /// Number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Total price for the whole stay.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        u64::try_from(self.nights()).unwrap_or(0) * u64::from(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights_and_total() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":1,"roomId":1,"roomNumber":"101","capacity":2,"floor":1,"beds":1,
                "price":5000,"checkIn":"2024-03-20","checkOut":"2024-03-25","type":"Standard"}"#,
        )
        .unwrap();

        assert_eq!(booking.nights(), 5);
        assert_eq!(booking.total_price(), 25_000);
    }
}
