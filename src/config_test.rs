use super::*;

// =============================================================================
// AuthConfig::from_env — env manipulation requires unsafe in edition 2024.
// All env-touching assertions live in one test so they cannot race each other.
// =============================================================================

/// # Safety
/// Only called from the single env-mutating test below.
unsafe fn clear_auth_env() {
    unsafe {
        std::env::remove_var("AUTH_LOGIN_DELAY_MS");
        std::env::remove_var("AUTH_LOGOUT_DELAY_MS");
        std::env::remove_var("AUTH_STORAGE_PATH");
    }
}

#[test]
fn from_env_defaults_overrides_and_fallbacks() {
    unsafe { clear_auth_env() };
    assert_eq!(AuthConfig::from_env(), AuthConfig::default());

    unsafe {
        std::env::set_var("AUTH_LOGIN_DELAY_MS", "250");
        std::env::set_var("AUTH_LOGOUT_DELAY_MS", " 10 ");
        std::env::set_var("AUTH_STORAGE_PATH", "/tmp/session.json");
    }
    let cfg = AuthConfig::from_env();
    assert_eq!(cfg.login_delay, Duration::from_millis(250));
    assert_eq!(cfg.logout_delay, Duration::from_millis(10));
    assert_eq!(cfg.storage_path, PathBuf::from("/tmp/session.json"));

    unsafe {
        std::env::set_var("AUTH_LOGIN_DELAY_MS", "soon");
        std::env::set_var("AUTH_LOGOUT_DELAY_MS", "-5");
    }
    let cfg = AuthConfig::from_env();
    assert_eq!(cfg.login_delay, Duration::from_millis(DEFAULT_LOGIN_DELAY_MS));
    assert_eq!(cfg.logout_delay, Duration::from_millis(DEFAULT_LOGOUT_DELAY_MS));

    unsafe { clear_auth_env() };
}

#[test]
fn default_matches_documented_delays() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.login_delay, Duration::from_secs(1));
    assert_eq!(cfg.logout_delay, Duration::from_millis(500));
    assert_eq!(cfg.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
}

#[test]
fn instant_disables_delays_only() {
    let cfg = AuthConfig::instant();
    assert_eq!(cfg.login_delay, Duration::ZERO);
    assert_eq!(cfg.logout_delay, Duration::ZERO);
    assert_eq!(cfg.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
}
