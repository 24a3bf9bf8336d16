//! Infrastructure layer with adapters for storage, config and the mock backend.

/// Mock authentication backend.
pub mod auth;
/// Demo rooms and bookings.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Profile backend placeholder.
pub mod profile;
/// Session storage adapters.
pub mod storage;

pub use auth::InMemoryAuthRepository;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use profile::DiscardingProfileStore;
pub use storage::{FileSessionStorage, MemorySessionStorage};
