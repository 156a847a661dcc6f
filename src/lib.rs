//! Mock authentication slice: a simulated login/logout service persisting a
//! session record in key-value storage, an observable auth store over it, and
//! a login form model.
//!
//! ARCHITECTURE
//! ============
//! `types` ← `storage` ← `services::auth` ← `state::auth` ← `form`.
//! Instances are built once at startup and passed down explicitly; nothing
//! here is a process-wide singleton.

pub mod config;
pub mod error;
pub mod form;
pub mod services;
pub mod state;
pub mod storage;
pub mod types;

pub use config::AuthConfig;
pub use error::{AuthError, StorageError};
pub use form::{FieldErrors, LoginForm, SubmitOutcome};
pub use services::auth::{AuthService, MockAuthService, STORAGE_KEY};
pub use state::auth::AuthStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{AuthState, Credentials, User};
