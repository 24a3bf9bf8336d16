//! Domain error types.

mod auth_error;
mod catalog_error;
mod storage_error;

pub use auth_error::AuthError;
pub use catalog_error::CatalogError;
pub use storage_error::StorageError;
