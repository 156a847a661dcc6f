//! Error taxonomy for the auth slice.
//!
//! ERROR HANDLING
//! ==============
//! `InvalidCredentials` is the only domain error. Storage failures during
//! login/logout surface as `AuthError::Storage`. Failures while *reading*
//! the session never reach this type: they are mapped to "no session" by
//! the service.

/// Failure of a key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file is not a JSON object of string values.
    #[error("storage format invalid: {0}")]
    Format(#[from] serde_json::Error),
}

/// Failure of an auth service operation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}
