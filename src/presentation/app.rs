//! Command dispatcher standing in for the app screens.

use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::{Report, Result, WrapErr};
use tracing::debug;

use crate::application::{
    AuthOutcome, BookingService, LoginUseCase, LogoutUseCase, RegisterUseCase,
    RoomControlService, SessionStore, SubmitAdditionalInfoUseCase,
};
use crate::domain::entities::{
    AdditionalUserInfo, LoginCredentials, ManagedRoom, RegisterCredentials, User,
};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, ProfilePort, SessionStoragePort};
use crate::infrastructure::catalog;
use crate::presentation::commands::{Command, ControlArgs};

/// Wires use cases and services together and renders their results as text.
pub struct App {
    session: Arc<SessionStore>,
    login: LoginUseCase,
    register: RegisterUseCase,
    logout: LogoutUseCase,
    additional_info: SubmitAdditionalInfoUseCase,
    bookings: BookingService,
    controls: RoomControlService,
}

impl App {
    /// Creates the app around the given backend and storage adapters.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        storage: Arc<dyn SessionStoragePort>,
        profile_port: Arc<dyn ProfilePort>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(storage));

        Self {
            login: LoginUseCase::new(auth_port.clone(), session.clone()),
            register: RegisterUseCase::new(auth_port.clone(), session.clone()),
            logout: LogoutUseCase::new(auth_port, session.clone()),
            additional_info: SubmitAdditionalInfoUseCase::new(profile_port, session.clone()),
            bookings: BookingService::new(catalog::seed_rooms(), catalog::seed_bookings()),
            controls: RoomControlService::new(catalog::seed_managed_rooms()),
            session,
        }
    }

    /// Returns the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Restores the persisted session. Never fails.
    pub async fn start(&self) -> Option<User> {
        self.session.load().await
    }

    /// Runs one command, writing human-readable output to `out`.
    ///
    /// # Errors
    /// Returns the auth or lookup error of the command, or an I/O error from `out`.
    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        debug!(command = command.name(), "Running command");

        match command {
            Command::Register {
                email,
                password,
                confirm,
            } => {
                let mut credentials = RegisterCredentials::new(email, password);
                if let Some(confirm) = confirm {
                    credentials = credentials.with_confirmation(confirm);
                }
                let outcome = self.register.execute(credentials).await?;
                Self::print_outcome(out, "Registered", &outcome)?;
            }
            Command::Login { email, password } => {
                let outcome = self
                    .login
                    .execute(LoginCredentials::new(email, password))
                    .await?;
                Self::print_outcome(out, "Logged in", &outcome)?;
            }
            Command::Logout => {
                self.logout.execute().await?;
                writeln!(out, "Logged out")?;
            }
            Command::Whoami => match self.session.current_user().await {
                Some(user) => writeln!(out, "{} ({})", user.email(), user.role())?,
                None => writeln!(out, "Not logged in")?,
            },
            Command::Profile => {
                let user = self.require_user().await?;
                Self::print_profile(out, &user)?;
            }
            Command::AdditionalInfo {
                passport_number,
                birth_date,
                phone_number,
            } => {
                let info = AdditionalUserInfo::new(passport_number, birth_date, phone_number);
                self.additional_info.execute(info).await?;
                writeln!(out, "Details submitted")?;
            }
            Command::Rooms => {
                for room in self.bookings.rooms() {
                    writeln!(
                        out,
                        "#{} room {} | {} | floor {} | {} guests | {} beds | {}/night",
                        room.id,
                        room.number,
                        room.kind,
                        room.floor,
                        room.capacity,
                        room.beds,
                        room.price
                    )?;
                }
            }
            Command::Bookings => {
                self.require_user().await?;
                let bookings = self.bookings.bookings();
                if bookings.is_empty() {
                    writeln!(out, "No active bookings")?;
                }
                for booking in bookings {
                    writeln!(
                        out,
                        "#{} room {} | {} | {} to {} | {} nights | total {}",
                        booking.id,
                        booking.room_number,
                        booking.kind,
                        booking.check_in,
                        booking.check_out,
                        booking.nights(),
                        booking.total_price()
                    )?;
                }
            }
            Command::Book { room_id } => {
                self.require_user().await?;
                let room = self.bookings.book(room_id)?;
                writeln!(out, "Booking created for room {}", room.number)?;
            }
            Command::Cancel { booking_id } => {
                self.require_user().await?;
                let booking = self.bookings.cancel(booking_id)?;
                writeln!(out, "Booking #{} cancelled", booking.id)?;
            }
            Command::Control(args) => {
                self.require_user().await?;
                let room = self.apply_controls(&args).await?;
                Self::print_controls(out, room.as_ref())?;
            }
        }

        Ok(())
    }

    /// Writes a form error (bad credentials, taken email, mismatched
    /// confirmation) as inline text. Returns `false` for any other error so
    /// the caller can report it in full.
    ///
    /// # Errors
    /// Returns an I/O error from `out`.
    pub fn render_form_error<W: Write>(err: &Report, out: &mut W) -> std::io::Result<bool> {
        match err.downcast_ref::<AuthError>() {
            Some(auth) if auth.is_form_error() => {
                writeln!(out, "Error: {auth}")?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn require_user(&self) -> Result<User, AuthError> {
        self.session
            .current_user()
            .await
            .ok_or(AuthError::NotAuthenticated)
    }

    async fn apply_controls(&self, args: &ControlArgs) -> Result<Option<ManagedRoom>> {
        if let Some(room_id) = args.room {
            self.controls.select(room_id).await?;
        }
        if let Some(locked) = args.door() {
            self.controls.set_door_locked(locked).await?;
        }
        if let Some(humidity) = args.humidity {
            self.controls.set_humidity(humidity).await?;
        }
        if let Some(temperature) = args.temperature {
            self.controls.set_temperature(temperature).await?;
        }
        if let Some(lights) = args.lights {
            self.controls.set_lights(lights.is_on()).await?;
        }

        Ok(self.controls.selected().await)
    }

    fn print_outcome<W: Write>(out: &mut W, verb: &str, outcome: &AuthOutcome) -> Result<()> {
        writeln!(
            out,
            "{verb} as {} ({}), next: {}",
            outcome.user.email(),
            outcome.user.role(),
            outcome.destination
        )
        .wrap_err("Failed to write output")
    }

    fn print_profile<W: Write>(out: &mut W, user: &User) -> Result<()> {
        writeln!(out, "Name:  {}", user.display_name())?;
        writeln!(out, "Email: {}", user.email())?;
        writeln!(out, "Phone: {}", user.phone().unwrap_or("-"))?;
        writeln!(out, "Role:  {}", user.role())?;
        Ok(())
    }

    fn print_controls<W: Write>(out: &mut W, room: Option<&ManagedRoom>) -> Result<()> {
        let Some(room) = room else {
            writeln!(out, "No rooms to control")?;
            return Ok(());
        };

        let controls = &room.controls;
        writeln!(out, "Room {} ({}, floor {})", room.number, room.kind, room.floor)?;
        writeln!(
            out,
            "  door: {}",
            if controls.door_locked { "locked" } else { "unlocked" }
        )?;
        writeln!(out, "  humidity: {}%", controls.humidity)?;
        writeln!(out, "  temperature: {}°C", controls.temperature)?;
        writeln!(
            out,
            "  lights: {}",
            if controls.lights_on { "on" } else { "off" }
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::SESSION_KEY;
    use crate::infrastructure::{DiscardingProfileStore, InMemoryAuthRepository, MemorySessionStorage};
    use crate::presentation::commands::Switch;
    use std::time::Duration;

    fn app_with_storage(storage: Arc<MemorySessionStorage>) -> App {
        let auth = InMemoryAuthRepository::seeded().with_latency(Duration::ZERO, Duration::ZERO);
        App::new(
            Arc::new(auth),
            storage,
            Arc::new(DiscardingProfileStore::new(Duration::ZERO)),
        )
    }

    fn app() -> App {
        app_with_storage(Arc::new(MemorySessionStorage::new()))
    }

    async fn run(app: &App, command: Command) -> Result<String> {
        let mut out = Vec::new();
        app.run(command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn login(email: &str, password: &str) -> Command {
        Command::Login {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_login_flow() {
        let app = app();

        let output = run(
            &app,
            Command::Register {
                email: "new@example.com".to_string(),
                password: "Secret1".to_string(),
                confirm: Some("Secret1".to_string()),
            },
        )
        .await
        .unwrap();
        assert!(output.contains("next: additional info form"));

        run(&app, Command::Logout).await.unwrap();
        assert_eq!(app.session().current_user().await, None);

        let output = run(&app, login("new@example.com", "Secret1")).await.unwrap();
        assert!(output.contains("new@example.com (user), next: user dashboard"));
    }

    #[tokio::test]
    async fn test_admin_login_output() {
        let output = run(&app(), login("admin@example.com", "Admin123"))
            .await
            .unwrap();
        assert!(output.contains("next: admin dashboard"));
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_form_error() {
        let err = run(&app(), login("user@example.com", "nope"))
            .await
            .unwrap_err();

        let auth = err.downcast_ref::<AuthError>().unwrap();
        assert!(matches!(auth, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_form_errors_render_inline() {
        let err = run(
            &app(),
            Command::Register {
                email: "user@example.com".to_string(),
                password: "User123".to_string(),
                confirm: None,
            },
        )
        .await
        .unwrap_err();

        let mut out = Vec::new();
        assert!(App::render_form_error(&err, &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: a user with email user@example.com already exists\n"
        );
    }

    #[tokio::test]
    async fn test_non_form_errors_are_not_rendered() {
        let err = run(&app(), Command::Profile).await.unwrap_err();

        let mut out = Vec::new();
        assert!(!App::render_form_error(&err, &mut out).unwrap());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_session_is_shared_between_app_instances() {
        let storage = Arc::new(MemorySessionStorage::new());

        let first = app_with_storage(storage.clone());
        run(&first, login("user@example.com", "User123")).await.unwrap();
        assert!(storage.has_item(SESSION_KEY).await.unwrap());

        let second = app_with_storage(storage);
        let restored = second.start().await.unwrap();
        assert_eq!(restored.email(), "user@example.com");

        let output = run(&second, Command::Profile).await.unwrap();
        assert!(output.contains("Иванов Иван Иванович"));
        assert!(output.contains("+375 (29) 123-45-67"));
    }

    #[tokio::test]
    async fn test_startup_with_malformed_session() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage.set_item(SESSION_KEY, "<<garbage>>").await.unwrap();

        let app = app_with_storage(storage);
        assert_eq!(app.start().await, None);

        let output = run(&app, Command::Whoami).await.unwrap();
        assert_eq!(output, "Not logged in\n");
    }

    #[tokio::test]
    async fn test_catalog_commands_require_login() {
        let app = app();

        let err = run(&app, Command::Bookings).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::NotAuthenticated)
        ));

        let output = run(&app, Command::Rooms).await.unwrap();
        assert_eq!(output.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_control_command_updates_room() {
        let app = app();
        run(&app, login("user@example.com", "User123")).await.unwrap();

        let output = run(
            &app,
            Command::Control(ControlArgs {
                room: Some(2),
                unlock: true,
                humidity: Some(60),
                lights: Some(Switch::Off),
                ..ControlArgs::default()
            }),
        )
        .await
        .unwrap();

        assert!(output.contains("Room 205"));
        assert!(output.contains("door: unlocked"));
        assert!(output.contains("humidity: 60%"));
        assert!(output.contains("lights: off"));
    }

    #[tokio::test]
    async fn test_additional_info_after_register() {
        let app = app();
        run(
            &app,
            Command::Register {
                email: "new@example.com".to_string(),
                password: "Secret1".to_string(),
                confirm: None,
            },
        )
        .await
        .unwrap();

        let output = run(
            &app,
            Command::AdditionalInfo {
                passport_number: "MP4000000".to_string(),
                birth_date: "01.02.1990".to_string(),
                phone_number: "+375291234567".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(output, "Details submitted\n");
    }
}
