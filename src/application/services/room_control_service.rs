//! Remote control of in-room devices.

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::{ManagedRoom, RoomControls, RoomId};
use crate::domain::errors::CatalogError;

struct ControlState {
    rooms: Vec<ManagedRoom>,
    selected: Option<RoomId>,
}

/// Holds the guest's managed rooms and applies control changes to the
/// selected one. Changes stay in memory.
pub struct RoomControlService {
    state: RwLock<ControlState>,
}

impl RoomControlService {
    /// Creates the service with the first room selected.
    #[must_use]
    pub fn new(rooms: Vec<ManagedRoom>) -> Self {
        let selected = rooms.first().map(|room| room.id);
        Self {
            state: RwLock::new(ControlState { rooms, selected }),
        }
    }

    pub async fn rooms(&self) -> Vec<ManagedRoom> {
        self.state.read().await.rooms.clone()
    }

    pub async fn selected(&self) -> Option<ManagedRoom> {
        let state = self.state.read().await;
        let id = state.selected?;
        state.rooms.iter().find(|room| room.id == id).cloned()
    }

    /// Makes `room_id` the target of later control calls.
    ///
    /// # Errors
    /// Returns `UnknownRoom` if the room is not managed by this guest.
    pub async fn select(&self, room_id: RoomId) -> Result<ManagedRoom, CatalogError> {
        let mut state = self.state.write().await;
        let room = state
            .rooms
            .iter()
            .find(|room| room.id == room_id)
            .cloned()
            .ok_or(CatalogError::UnknownRoom(room_id))?;
        state.selected = Some(room_id);
        Ok(room)
    }

    /// Locks or unlocks the door.
    ///
    /// # Errors
    /// Returns `NoRoomSelected` if there is nothing to control.
    pub async fn set_door_locked(&self, locked: bool) -> Result<ManagedRoom, CatalogError> {
        self.update(|room| {
            room.controls.door_locked = locked;
            info!(room = %room.number, locked, "Door state changed");
        })
        .await
    }

    /// Sets humidity, clamped to the supported range.
    ///
    /// # Errors
    /// Returns `NoRoomSelected` if there is nothing to control.
    pub async fn set_humidity(&self, percent: i32) -> Result<ManagedRoom, CatalogError> {
        let humidity = RoomControls::clamp_humidity(percent);
        self.update(|room| {
            room.controls.humidity = humidity;
            info!(room = %room.number, humidity, "Humidity set");
        })
        .await
    }

    /// Sets temperature, clamped to the supported range.
    ///
    /// # Errors
    /// Returns `NoRoomSelected` if there is nothing to control.
    pub async fn set_temperature(&self, celsius: i32) -> Result<ManagedRoom, CatalogError> {
        let temperature = RoomControls::clamp_temperature(celsius);
        self.update(|room| {
            room.controls.temperature = temperature;
            info!(room = %room.number, temperature, "Temperature set");
        })
        .await
    }

    /// Switches the lights.
    ///
    /// # Errors
    /// Returns `NoRoomSelected` if there is nothing to control.
    pub async fn set_lights(&self, on: bool) -> Result<ManagedRoom, CatalogError> {
        self.update(|room| {
            room.controls.lights_on = on;
            info!(room = %room.number, on, "Lights switched");
        })
        .await
    }

    async fn update(
        &self,
        apply: impl FnOnce(&mut ManagedRoom),
    ) -> Result<ManagedRoom, CatalogError> {
        let mut state = self.state.write().await;
        let id = state.selected.ok_or(CatalogError::NoRoomSelected)?;
        let room = state
            .rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or(CatalogError::UnknownRoom(id))?;
        apply(room);
        Ok(room.clone())
    }
}
