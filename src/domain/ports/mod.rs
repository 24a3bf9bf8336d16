mod auth_port;
mod profile_port;
mod session_storage_port;

pub use auth_port::AuthPort;
pub use profile_port::ProfilePort;
pub use session_storage_port::SessionStoragePort;
