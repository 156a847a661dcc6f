//! Auth store — observable session state over an [`AuthService`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumers (forms, route guards, the CLI) read snapshots or subscribe to
//! the `watch` channel to react to sign-in, sign-out, loading, and errors.
//!
//! DESIGN
//! ======
//! Every operation follows the same shape: raise `is_loading`, clear the
//! error (except hydration), call the service, record the outcome, drop
//! `is_loading`. Each step is published as its own update.
//!
//! TRADE-OFFS
//! ==========
//! Operations are not serialized. Two overlapping calls interleave their
//! updates and the last write wins. Every single update is atomic, so the
//! `user` / `is_authenticated` pair never tears.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::services::auth::AuthService;
use crate::types::{AuthState, Credentials, User};

const INITIALIZE_FALLBACK: &str = "Failed to initialize auth";
const LOGIN_FALLBACK: &str = "Login failed";
const LOGOUT_FALLBACK: &str = "Logout failed";

/// Shared handle to the auth state. Clones observe and mutate the same state.
pub struct AuthStore<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    service: A,
    state: watch::Sender<AuthState>,
}

impl<A> Clone for AuthStore<A> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<A: AuthService + 'static> AuthStore<A> {
    /// Create the store and start hydrating from the service in the
    /// background. The returned store reports `is_loading` until hydration
    /// finishes; await [`AuthStore::settled`] to observe the result.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn new(service: A) -> Self {
        let initial = AuthState { is_loading: true, ..AuthState::default() };
        let store = Self { inner: Arc::new(Inner { service, state: watch::Sender::new(initial) }) };
        let hydrating = store.clone();
        tokio::spawn(async move {
            hydrating.initialize().await;
        });
        store
    }
}

impl<A: AuthService> AuthStore<A> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn service(&self) -> &A {
        &self.inner.service
    }

    /// Wait until no operation reports `is_loading`, returning that state.
    pub async fn settled(&self) -> AuthState {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Re-read the persisted session. Errors land in `error`, never in the
    /// caller's control flow.
    pub async fn initialize(&self) {
        self.update(|state| state.is_loading = true);
        match self.inner.service.current_user().await {
            Ok(Some(user)) => {
                debug!(user_id = %user.id, "session restored");
                self.update(move |state| state.set_user(Some(user)));
            }
            Ok(None) => debug!("no stored session"),
            Err(e) => {
                warn!(error = %e, "auth initialization failed");
                let message = error_message(&e, INITIALIZE_FALLBACK);
                self.update(move |state| state.error = Some(message));
            }
        }
        self.update(|state| state.is_loading = false);
    }

    /// Sign in. The error is recorded in `error` and also returned.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.begin();
        let result = self.inner.service.login(credentials).await;
        match &result {
            Ok(user) => {
                let user = user.clone();
                self.update(move |state| state.set_user(Some(user)));
            }
            Err(e) => {
                let message = error_message(e, LOGIN_FALLBACK);
                self.update(move |state| state.error = Some(message));
            }
        }
        self.update(|state| state.is_loading = false);
        result
    }

    /// Sign out. Failures only populate `error`.
    pub async fn logout(&self) {
        self.begin();
        match self.inner.service.logout().await {
            Ok(()) => self.update(|state| state.set_user(None)),
            Err(e) => {
                warn!(error = %e, "logout failed");
                let message = error_message(&e, LOGOUT_FALLBACK);
                self.update(move |state| state.error = Some(message));
            }
        }
        self.update(|state| state.is_loading = false);
    }

    pub fn clear_error(&self) {
        self.update(|state| state.error = None);
    }

    fn begin(&self) {
        self.update(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn update(&self, modify: impl FnOnce(&mut AuthState)) {
        self.inner.state.send_modify(modify);
    }
}

fn error_message(err: &AuthError, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() { fallback.to_owned() } else { message }
}
