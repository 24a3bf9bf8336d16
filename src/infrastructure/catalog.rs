//! Demo rooms and bookings.

use chrono::NaiveDate;

use crate::domain::entities::{Booking, ManagedRoom, Room, RoomControls, RoomType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Rooms offered on the home screen.
#[must_use]
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            number: "101".to_string(),
            capacity: 2,
            floor: 1,
            beds: 1,
            price: 5000,
            kind: RoomType::Standard,
        },
        Room {
            id: 2,
            number: "201".to_string(),
            capacity: 3,
            floor: 2,
            beds: 2,
            price: 7500,
            kind: RoomType::Luxury,
        },
        Room {
            id: 3,
            number: "301".to_string(),
            capacity: 4,
            floor: 3,
            beds: 2,
            price: 10000,
            kind: RoomType::Family,
        },
    ]
}

/// Bookings held by the demo guest.
#[must_use]
pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            room_id: 1,
            room_number: "101".to_string(),
            capacity: 2,
            floor: 1,
            beds: 1,
            price: 5000,
            check_in: date(2024, 3, 20),
            check_out: date(2024, 3, 25),
            kind: RoomType::Standard,
        },
        Booking {
            id: 2,
            room_id: 2,
            room_number: "201".to_string(),
            capacity: 3,
            floor: 2,
            beds: 2,
            price: 7500,
            check_in: date(2024, 4, 1),
            check_out: date(2024, 4, 5),
            kind: RoomType::Luxury,
        },
    ]
}

/// Occupied rooms with their device state.
#[must_use]
pub fn seed_managed_rooms() -> Vec<ManagedRoom> {
    let room = |id, number: &str, floor, kind, humidity, temperature, lights_on| ManagedRoom {
        id,
        number: number.to_string(),
        floor,
        kind,
        controls: RoomControls {
            door_locked: true,
            humidity,
            temperature,
            lights_on,
        },
    };

    vec![
        room(1, "101", 1, RoomType::Standard, 45, 22, false),
        room(2, "205", 2, RoomType::Luxury, 50, 23, true),
        room(3, "310", 3, RoomType::Standard, 48, 21, false),
    ]
}
