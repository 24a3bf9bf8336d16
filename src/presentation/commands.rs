//! Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::entities::{BookingId, RoomId};
use crate::infrastructure::config::CliArgs;

/// Top-level parser: global flags plus one subcommand.
#[derive(Debug, Parser)]
#[command(
    name = "roomkey",
    version,
    about = "Hotel room booking and room-control client",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: CliArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Actions available from the command line.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an account and log in.
    Register {
        email: String,
        password: String,
        /// Repeat the password.
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Log in with an existing account.
    Login { email: String, password: String },
    /// Log out and forget the stored session.
    Logout,
    /// Show the logged-in account.
    Whoami,
    /// Show the profile of the logged-in account.
    Profile,
    /// Submit passport, birth date and phone after registering.
    AdditionalInfo {
        passport_number: String,
        birth_date: String,
        phone_number: String,
    },
    /// List rooms available for booking.
    Rooms,
    /// List your bookings.
    Bookings,
    /// Book a room.
    Book { room_id: RoomId },
    /// Cancel a booking.
    Cancel { booking_id: BookingId },
    /// Show or change in-room controls.
    Control(ControlArgs),
}

impl Command {
    /// Subcommand name, safe to log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::Whoami => "whoami",
            Self::Profile => "profile",
            Self::AdditionalInfo { .. } => "additional-info",
            Self::Rooms => "rooms",
            Self::Bookings => "bookings",
            Self::Book { .. } => "book",
            Self::Cancel { .. } => "cancel",
            Self::Control(_) => "control",
        }
    }
}

/// Light switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Room control changes, applied in flag order: select, door, climate, lights.
#[derive(Debug, Clone, Default, Args)]
pub struct ControlArgs {
    /// Room to operate; defaults to the first one.
    #[arg(long)]
    pub room: Option<RoomId>,

    /// Lock the door.
    #[arg(long, conflicts_with = "unlock")]
    pub lock: bool,

    /// Unlock the door.
    #[arg(long)]
    pub unlock: bool,

    /// Target humidity, percent.
    #[arg(long, allow_negative_numbers = true)]
    pub humidity: Option<i32>,

    /// Target temperature, degrees Celsius.
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<i32>,

    /// Switch the lights.
    #[arg(long, value_enum)]
    pub lights: Option<Switch>,
}

impl ControlArgs {
    /// Returns the requested door state, if any.
    #[must_use]
    pub const fn door(&self) -> Option<bool> {
        match (self.lock, self.unlock) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}
