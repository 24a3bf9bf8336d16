//! Application services.

mod booking_service;
mod room_control_service;
mod session_store;

pub use booking_service::BookingService;
pub use room_control_service::RoomControlService;
pub use session_store::{SESSION_KEY, SessionStore};
