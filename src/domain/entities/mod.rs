//! Domain entities.

mod auth_response;
mod booking;
mod credentials;
mod profile;
mod room;
mod token;
mod user;

pub use auth_response::AuthResponse;
pub use booking::{Booking, BookingId};
pub use credentials::{LoginCredentials, Password, RegisterCredentials};
pub use profile::AdditionalUserInfo;
pub use room::{ManagedRoom, Room, RoomControls, RoomId, RoomType};
pub use token::SessionToken;
pub use user::{Role, User, UserId};
