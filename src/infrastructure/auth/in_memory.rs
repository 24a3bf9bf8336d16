//! In-memory stand-in for the authentication backend.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::domain::entities::{
    AuthResponse, LoginCredentials, Password, RegisterCredentials, Role, SessionToken, User,
    UserId,
};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Token handed out for every successful call.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Default delay of login and register.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);
/// Default delay of logout.
pub const DEFAULT_LOGOUT_LATENCY: Duration = Duration::from_millis(500);

struct CredentialRecord {
    user: User,
    password: Password,
}

/// Credential repository living for the lifetime of the process.
///
/// Every call sleeps for the configured latency before answering.
pub struct InMemoryAuthRepository {
    records: RwLock<Vec<CredentialRecord>>,
    latency: Duration,
    logout_latency: Duration,
}

impl InMemoryAuthRepository {
    /// Creates an empty repository with default latencies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            latency: DEFAULT_LATENCY,
            logout_latency: DEFAULT_LOGOUT_LATENCY,
        }
    }

    /// Creates a repository holding the demo admin and guest accounts.
    #[must_use]
    pub fn seeded() -> Self {
        let records = vec![
            CredentialRecord {
                user: User::new("1", "admin@example.com", Role::Admin),
                password: Password::new("Admin123"),
            },
            CredentialRecord {
                user: User::new("2", "user@example.com", Role::User)
                    .with_full_name("Иван", "Иванов", "Иванович")
                    .with_phone("+375 (29) 123-45-67"),
                password: Password::new("User123"),
            },
        ];

        Self {
            records: RwLock::new(records),
            ..Self::new()
        }
    }

    /// Overrides the login/register and logout delays.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration, logout_latency: Duration) -> Self {
        self.latency = latency;
        self.logout_latency = logout_latency;
        self
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn respond(user: User) -> AuthResponse {
        AuthResponse::new(user, SessionToken::new_unchecked(MOCK_TOKEN))
    }
}

impl Default for InMemoryAuthRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl AuthPort for InMemoryAuthRepository {
    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        Self::simulate_latency(self.latency).await;

        let records = self.records.read().await;
        let record = records
            .iter()
            .find(|record| record.user.email() == credentials.email)
            .filter(|record| record.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(user_id = %record.user.id(), "Credentials matched");
        Ok(Self::respond(record.user.clone()))
    }

    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn register(
        &self,
        credentials: &RegisterCredentials,
    ) -> Result<AuthResponse, AuthError> {
        Self::simulate_latency(self.latency).await;

        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|record| record.user.email() == credentials.email)
        {
            return Err(AuthError::user_exists(&credentials.email));
        }

        let id = UserId::sequential(records.len() + 1);
        let user = User::new(id, credentials.email.clone(), Role::User);
        records.push(CredentialRecord {
            user: user.clone(),
            password: credentials.password.clone(),
        });

        info!(user_id = %user.id(), "Mock account created");
        Ok(Self::respond(user))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        Self::simulate_latency(self.logout_latency).await;
        debug!("Mock logout complete");
        Ok(())
    }
}
