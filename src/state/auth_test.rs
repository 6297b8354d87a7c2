use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn initializing_state_is_loading_and_signed_out() {
    let state = AuthState::initializing();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_when_user_present() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "username": "alice" })).unwrap();
    let state = AuthState { user: Some(user), loading: false };
    assert!(state.is_signed_in());
}
