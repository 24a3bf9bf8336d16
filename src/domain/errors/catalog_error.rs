//! Room and booking lookup errors.

use thiserror::Error;

use crate::domain::entities::{BookingId, RoomId};

/// Errors raised by booking and room-control operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("room {0} not found")]
    UnknownRoom(RoomId),

    #[error("booking {0} not found")]
    UnknownBooking(BookingId),

    #[error("no room selected")]
    NoRoomSelected,
}
