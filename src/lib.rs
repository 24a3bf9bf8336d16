//! Roomkey - hotel room booking and room-control client.
//!
//! Authentication and data are served by an in-memory mock backend; the
//! logged-in user is kept in a small key-value session store that survives
//! restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for storage, config and the mock backend.
pub mod infrastructure;
/// Presentation layer containing the command-line front-end.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "roomkey";
