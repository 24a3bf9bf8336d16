use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Global flags shared by every subcommand.
#[derive(Debug, Parser)]
#[command(
    name = "roomkey",
    version,
    about = "Hotel room booking and room-control client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the persisted session.
    #[arg(long, value_name = "PATH", env = "ROOMKEY_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the session in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Simulated backend latency in milliseconds.
    #[arg(long, value_name = "MS", global = true)]
    pub latency_ms: Option<u64>,
}
