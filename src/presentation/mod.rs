//! Presentation layer: command-line parsing and output.

/// Command dispatcher.
pub mod app;
/// Command-line definitions.
pub mod commands;

pub use app::App;
pub use commands::{Cli, Command, ControlArgs};
