//! Domain services backing the auth store.
//!
//! ARCHITECTURE
//! ============
//! Services own credential checks and session persistence so the store can
//! stay focused on state transitions and change notification.

pub mod auth;
