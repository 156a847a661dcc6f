//! Auth slice configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOGOUT_DELAY_MS: u64 = 500;
pub const DEFAULT_STORAGE_PATH: &str = "auth_storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Simulated latency before a login attempt resolves.
    pub login_delay: Duration,
    /// Simulated latency before a logout resolves.
    pub logout_delay: Duration,
    /// Backing file for [`crate::storage::FileStore`].
    pub storage_path: PathBuf,
}

impl AuthConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_LOGIN_DELAY_MS`: default 1000
    /// - `AUTH_LOGOUT_DELAY_MS`: default 500
    /// - `AUTH_STORAGE_PATH`: default `auth_storage.json`
    ///
    /// Unparsable delays fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let storage_path = std::env::var("AUTH_STORAGE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);
        Self {
            login_delay: Duration::from_millis(env_parse("AUTH_LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)),
            logout_delay: Duration::from_millis(env_parse("AUTH_LOGOUT_DELAY_MS", DEFAULT_LOGOUT_DELAY_MS)),
            storage_path,
        }
    }

    /// Config with both simulated delays disabled.
    #[must_use]
    pub fn instant() -> Self {
        Self { login_delay: Duration::ZERO, logout_delay: Duration::ZERO, ..Self::default() }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            logout_delay: Duration::from_millis(DEFAULT_LOGOUT_DELAY_MS),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
