//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Only [`SessionManager`] writes it.
//!
//! [`SessionManager`]: crate::state::session::SessionManager

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup restoration runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at mount time, before restoration has settled.
    pub fn initializing() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
