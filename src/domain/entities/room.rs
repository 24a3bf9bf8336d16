//! Rooms, their category and in-room controls.

use serde::{Deserialize, Serialize};

/// Numeric identifier of a bookable room.
pub type RoomId = u32;

/// Room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Luxury,
    Family,
}

impl RoomType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Luxury => "Luxury",
            Self::Family => "Family",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Room offered for booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub capacity: u8,
    pub floor: u8,
    pub beds: u8,
    /// Price per night in whole currency units.
    pub price: u32,
    #[serde(rename = "type")]
    pub kind: RoomType,
}

/// State of the automation devices in an occupied room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomControls {
    pub door_locked: bool,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Target temperature, degrees Celsius.
    pub temperature: i8,
    pub lights_on: bool,
}

impl RoomControls {
    pub const HUMIDITY_RANGE: (u8, u8) = (30, 70);
    pub const TEMPERATURE_RANGE: (i8, i8) = (16, 30);

    /// Clamps a requested humidity into the supported range.
    #[must_use]
    pub fn clamp_humidity(value: i32) -> u8 {
        let (min, max) = Self::HUMIDITY_RANGE;
        u8::try_from(value.clamp(i32::from(min), i32::from(max))).unwrap_or(max)
    }

    /// Clamps a requested temperature into the supported range.
    #[must_use]
    pub fn clamp_temperature(value: i32) -> i8 {
        let (min, max) = Self::TEMPERATURE_RANGE;
        i8::try_from(value.clamp(i32::from(min), i32::from(max))).unwrap_or(max)
    }
}

/// Occupied room the guest can operate remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedRoom {
    pub id: RoomId,
    pub number: String,
    pub floor: u8,
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub controls: RoomControls,
}
