use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::config::AuthConfig;
use crate::services::auth::{MockAuthService, mock_user};
use crate::storage::MemoryStore;

fn store() -> AuthStore<MockAuthService<Arc<MemoryStore>>> {
    AuthStore::new(MockAuthService::new(Arc::new(MemoryStore::new()), &AuthConfig::default()))
}

#[test]
fn labels_match_rendered_form() {
    assert_eq!(HEADING, "Login");
    assert_eq!(USERNAME_LABEL, "Username");
    assert_eq!(PASSWORD_LABEL, "Password");
    assert_eq!(SUBMIT_LABEL, "Sign In");
}

#[test]
fn validate_reports_both_missing_fields() {
    let errors = validate_login_input("", "").unwrap_err();
    assert_eq!(errors.messages(), vec!["Username is required", "Password is required"]);
}

#[test]
fn validate_reports_single_missing_field() {
    let errors = validate_login_input("admin", "").unwrap_err();
    assert_eq!(errors.username, None);
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));

    let errors = validate_login_input("", "admin").unwrap_err();
    assert_eq!(errors.username, Some(USERNAME_REQUIRED));
    assert_eq!(errors.password, None);
}

#[test]
fn validate_is_presence_only() {
    let creds = validate_login_input(" ", "x").unwrap();
    assert_eq!(creds.username, " ");
    assert_eq!(creds.password, "x");
}

#[tokio::test(start_paused = true)]
async fn submit_empty_shows_both_errors_without_calling_store() {
    let store = store();
    store.settled().await;
    let mut form = LoginForm::new();
    let mut called = false;

    let outcome = form.submit(&store, |_| called = true).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Invalid(FieldErrors { username: Some(USERNAME_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
    assert_eq!(form.errors().messages(), vec![USERNAME_REQUIRED, PASSWORD_REQUIRED]);
    assert!(!called);
    assert!(store.state().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn submit_valid_credentials_fires_callback_within_two_seconds() {
    let store = store();
    let mut form = LoginForm::new();
    form.set_username("admin");
    form.set_password("admin");
    let mut seen = None;

    let start = tokio::time::Instant::now();
    let outcome = tokio::time::timeout(
        Duration::from_secs(2),
        form.submit(&store, |user| seen = Some(user.clone())),
    )
    .await
    .unwrap();

    assert!(start.elapsed() <= Duration::from_secs(2));
    assert_eq!(outcome, SubmitOutcome::LoggedIn(mock_user()));
    assert_eq!(seen, Some(mock_user()));
    assert!(store.state().is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn submit_bad_credentials_is_rejected_without_callback() {
    let store = store();
    let mut form = LoginForm::new();
    form.set_username("admin");
    form.set_password("guess");
    let mut called = false;

    let outcome = form.submit(&store, |_| called = true).await;

    assert_eq!(outcome, SubmitOutcome::Rejected("Invalid credentials".to_owned()));
    assert!(!called);
    assert!(form.errors().is_empty());
    assert_eq!(store.state().error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test(start_paused = true)]
async fn resubmit_after_fixing_fields_clears_field_errors() {
    let store = store();
    let mut form = LoginForm::new();
    form.submit(&store, |_| {}).await;
    assert!(!form.errors().is_empty());

    form.set_username("admin");
    form.set_password("admin");
    let outcome = form.submit(&store, |_| {}).await;

    assert!(matches!(outcome, SubmitOutcome::LoggedIn(_)));
    assert!(form.errors().is_empty());
    assert_eq!(form.username(), "admin");
}
