//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthOutcome, Destination};
pub use services::{BookingService, RoomControlService, SessionStore};
pub use use_cases::{LoginUseCase, LogoutUseCase, RegisterUseCase, SubmitAdditionalInfoUseCase};
