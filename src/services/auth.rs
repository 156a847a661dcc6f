//! Mock auth service — simulated-latency login/logout over key-value storage.
//!
//! DESIGN
//! ======
//! Accepts exactly one hardcoded credential pair and persists a fixed user
//! record as JSON under [`STORAGE_KEY`]. The stored record is the session:
//! its presence on the next start means "signed in".
//!
//! ERROR HANDLING
//! ==============
//! `current_user` never fails. Unreadable or malformed records map to
//! "no session" and are only logged, so a corrupt store degrades to a
//! signed-out user instead of blocking startup.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::{AuthError, StorageError};
use crate::storage::KeyValueStore;
use crate::types::{Credentials, User};

/// Storage key holding the serialized session user.
pub const STORAGE_KEY: &str = "auth_user";

const MOCK_USERNAME: &str = "admin";
const MOCK_PASSWORD: &str = "admin";

/// The single user the mock service ever authenticates.
#[must_use]
pub fn mock_user() -> User {
    User { id: "1".to_owned(), username: MOCK_USERNAME.to_owned() }
}

/// Async auth contract consumed by [`crate::state::auth::AuthStore`].
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate and persist the session, returning the signed-in user.
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// End the session.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Read the persisted session user, if any.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;
}

// =============================================================================
// MOCK SERVICE
// =============================================================================

pub struct MockAuthService<S> {
    storage: S,
    login_delay: Duration,
    logout_delay: Duration,
}

impl<S: KeyValueStore> MockAuthService<S> {
    #[must_use]
    pub fn new(storage: S, config: &AuthConfig) -> Self {
        Self { storage, login_delay: config.login_delay, logout_delay: config.logout_delay }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn credentials_match(credentials: &Credentials) -> bool {
    credentials.username == MOCK_USERNAME && credentials.password == MOCK_PASSWORD
}

#[async_trait::async_trait]
impl<S: KeyValueStore> AuthService for MockAuthService<S> {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        tokio::time::sleep(self.login_delay).await;

        if !credentials_match(credentials) {
            warn!(username = %credentials.username, "login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let user = mock_user();
        let record = serde_json::to_string(&user).map_err(StorageError::from)?;
        self.storage.set_item(STORAGE_KEY, &record)?;
        info!(user_id = %user.id, username = %user.username, "login succeeded");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.logout_delay).await;
        self.storage.remove_item(STORAGE_KEY)?;
        info!("logged out");
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "session read failed; treating as signed out");
                return Ok(None);
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "stored session malformed; treating as signed out");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
