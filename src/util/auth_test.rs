use std::cell::RefCell;

use super::*;
use crate::net::types::User;

fn alice() -> User {
    serde_json::from_value(serde_json::json!({ "id": "u1", "username": "alice", "full_name": "Alice" })).unwrap()
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_signed_in(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(alice()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn signed_in_user_is_sent_home_from_login() {
    let state = AuthState { user: Some(alice()), loading: false };
    assert!(should_redirect_signed_in(&state));
    assert!(!should_redirect_signed_in(&AuthState::default()));
}

#[test]
fn login_submit_blocked_while_restoring() {
    assert!(!can_submit_login(&AuthState::initializing(), false));
    assert!(!can_submit_login(&AuthState { user: None, loading: true }, false));
}

#[test]
fn login_submit_blocked_while_busy() {
    assert!(!can_submit_login(&AuthState::default(), true));
}

#[test]
fn login_submit_allowed_once_restore_settled() {
    assert!(can_submit_login(&AuthState { user: None, loading: false }, false));
}

#[test]
fn unauth_redirect_navigates_to_login_after_restore() {
    let log = RefCell::new(Vec::<(String, bool)>::new());
    let navigate = |path: &str, opts: NavigateOptions| log.borrow_mut().push((path.to_owned(), opts.replace));

    apply_unauth_redirect(&AuthState::initializing(), &navigate);
    apply_unauth_redirect(&AuthState { user: Some(alice()), loading: false }, &navigate);
    assert!(log.borrow().is_empty());

    apply_unauth_redirect(&AuthState::default(), &navigate);
    assert_eq!(*log.borrow(), vec![(LOGIN_ROUTE.to_owned(), false)]);
}

#[test]
fn signed_in_redirect_replaces_history_with_dashboard() {
    let log = RefCell::new(Vec::<(String, bool)>::new());
    let navigate = |path: &str, opts: NavigateOptions| log.borrow_mut().push((path.to_owned(), opts.replace));

    apply_signed_in_redirect(&AuthState::default(), &navigate);
    apply_signed_in_redirect(&AuthState { user: Some(alice()), loading: true }, &navigate);
    assert!(log.borrow().is_empty());

    apply_signed_in_redirect(&AuthState { user: Some(alice()), loading: false }, &navigate);
    assert_eq!(*log.borrow(), vec![(HOME_ROUTE.to_owned(), true)]);
}
