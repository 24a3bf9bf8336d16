//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthResponse, Role, User};
pub use errors::{AuthError, CatalogError, StorageError};
pub use ports::{AuthPort, ProfilePort, SessionStoragePort};
