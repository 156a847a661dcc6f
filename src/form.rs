//! Login form model: field values, presence validation, and submission.
//!
//! Renderers bind inputs to [`LoginForm`] and show [`FieldErrors`] next to
//! each field; the store's `error` carries the rejection message.

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use tracing::debug;

use crate::services::auth::AuthService;
use crate::state::auth::AuthStore;
use crate::types::{Credentials, User};

pub const HEADING: &str = "Login";
pub const USERNAME_LABEL: &str = "Username";
pub const PASSWORD_LABEL: &str = "Password";
pub const SUBMIT_LABEL: &str = "Sign In";

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Messages in field order.
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.username.into_iter().chain(self.password).collect()
    }
}

/// Result of [`LoginForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; the store was not called.
    Invalid(FieldErrors),
    LoggedIn(User),
    /// The store rejected the login with this message.
    Rejected(String),
}

/// Check that both fields are present. Values are not trimmed.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        username: username.is_empty().then_some(USERNAME_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors.is_empty() { Ok(Credentials::new(username, password)) } else { Err(errors) }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    errors: FieldErrors,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Errors from the most recent submit.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    /// Validate, then log in through `store`. `on_success` runs once, only
    /// when the login succeeds.
    pub async fn submit<A, F>(&mut self, store: &AuthStore<A>, on_success: F) -> SubmitOutcome
    where
        A: AuthService,
        F: FnOnce(&User),
    {
        let credentials = match validate_login_input(&self.username, &self.password) {
            Ok(credentials) => credentials,
            Err(errors) => {
                debug!(?errors, "login form invalid");
                self.errors = errors;
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.errors = FieldErrors::default();

        match store.login(&credentials).await {
            Ok(user) => {
                on_success(&user);
                SubmitOutcome::LoggedIn(user)
            }
            Err(e) => SubmitOutcome::Rejected(e.to_string()),
        }
    }
}
