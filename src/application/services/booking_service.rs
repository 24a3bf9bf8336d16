//! Room listing and booking management.

use tracing::info;

use crate::domain::entities::{Booking, BookingId, Room, RoomId};
use crate::domain::errors::CatalogError;

/// Read-only view over bookable rooms and the guest's bookings.
///
/// Booking and cancelling are acknowledged and logged but change nothing.
pub struct BookingService {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl BookingService {
    #[must_use]
    pub const fn new(rooms: Vec<Room>, bookings: Vec<Booking>) -> Self {
        Self { rooms, bookings }
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Requests a booking for `room_id`.
    ///
    /// # Errors
    /// Returns `UnknownRoom` if no such room is listed.
    pub fn book(&self, room_id: RoomId) -> Result<&Room, CatalogError> {
        let room = self
            .rooms
            .iter()
            .find(|room| room.id == room_id)
            .ok_or(CatalogError::UnknownRoom(room_id))?;

        info!(room_id, room_number = %room.number, "Booking requested");
        Ok(room)
    }

    /// Requests cancellation of `booking_id`.
    ///
    /// # Errors
    /// Returns `UnknownBooking` if the guest holds no such booking.
    pub fn cancel(&self, booking_id: BookingId) -> Result<&Booking, CatalogError> {
        let booking = self
            .bookings
            .iter()
            .find(|booking| booking.id == booking_id)
            .ok_or(CatalogError::UnknownBooking(booking_id))?;

        info!(booking_id, room_number = %booking.room_number, "Booking cancellation requested");
        Ok(booking)
    }
}
