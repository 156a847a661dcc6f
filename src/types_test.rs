use super::*;

fn admin() -> User {
    User { id: "1".to_owned(), username: "admin".to_owned() }
}

#[test]
fn user_serializes_to_id_and_username() {
    let json = serde_json::to_string(&admin()).unwrap();
    assert_eq!(json, r#"{"id":"1","username":"admin"}"#);
}

#[test]
fn user_deserializes_from_stored_record() {
    let user: User = serde_json::from_str(r#"{"id": "1", "username": "admin"}"#).unwrap();
    assert_eq!(user, admin());
}

#[test]
fn user_missing_field_fails_to_deserialize() {
    assert!(serde_json::from_str::<User>(r#"{"id": "1"}"#).is_err());
}

#[test]
fn default_state_is_unauthenticated_and_idle() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn set_user_some_marks_authenticated() {
    let mut state = AuthState::default();
    state.set_user(Some(admin()));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(admin()));
}

#[test]
fn set_user_none_clears_authentication() {
    let mut state = AuthState::default();
    state.set_user(Some(admin()));
    state.set_user(None);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("admin", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}
