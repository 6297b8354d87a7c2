//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/dashboard";

/// True once restoration has settled without a signed-in user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when a signed-in user lands on the login page.
pub fn should_redirect_signed_in(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Login may only start once restoration has settled and no attempt is in flight.
pub fn can_submit_login(state: &AuthState, busy: bool) -> bool {
    !busy && !state.loading
}

fn apply_unauth_redirect<F>(state: &AuthState, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if should_redirect_unauth(state) {
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    }
}

fn apply_signed_in_redirect<F>(state: &AuthState, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if should_redirect_signed_in(state) {
        navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || auth.with(|state| apply_unauth_redirect(state, &navigate)));
}

/// Redirect to the dashboard once a user is signed in.
pub fn install_signed_in_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || auth.with(|state| apply_signed_in_redirect(state, &navigate)));
}
