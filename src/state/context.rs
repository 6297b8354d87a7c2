//! Provider scope for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` builds one [`SessionContext`] and places it in Leptos
//! context; every consumer below it reaches the session through
//! [`require_session`] or [`use_session`] instead of threading props.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::{ReadSignal, RwSignal, provide_context, use_context};

use crate::net::api::HttpAuthApi;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::session::{RestoreOutcome, SessionManager, UsageError};
use crate::util::credentials::LocalStorageCredentials;

/// Session manager wired to the browser collaborators.
pub type BrowserSession = SessionManager<HttpAuthApi, LocalStorageCredentials, RwSignal<AuthState>>;

/// Handle shared with components through Leptos context.
///
/// Cloning is cheap; all clones drive the same manager and signal.
#[derive(Clone)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    manager: Arc<BrowserSession>,
}

impl SessionContext {
    pub fn new(api: HttpAuthApi) -> Self {
        let state = RwSignal::new(AuthState::initializing());
        let manager = Arc::new(SessionManager::new(api, LocalStorageCredentials, state));
        Self { state, manager }
    }

    /// Read-only view of the current session state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Run startup restoration. `AuthProvider` calls this once on mount.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::AlreadyInitialized`] if restoration already ran.
    pub async fn initialize(&self) -> Result<RestoreOutcome, UsageError> {
        self.manager.initialize().await
    }

    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unchanged; state is not modified.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), ApiError> {
        self.manager.login(identifier, secret).await
    }

    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unchanged; state is not modified.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.manager.logout().await
    }
}

/// Make `session` available to the current reactive owner and its children.
pub fn provide_session(session: SessionContext) {
    provide_context(session);
}

/// Look up the session provided by an enclosing `AuthProvider`.
///
/// # Errors
///
/// Returns [`UsageError::OutsideProvider`] when no session is in scope.
pub fn require_session() -> Result<SessionContext, UsageError> {
    use_context::<SessionContext>().ok_or(UsageError::OutsideProvider)
}

/// Component-side accessor; a missing provider is a wiring bug.
///
/// # Panics
///
/// Panics with [`UsageError::OutsideProvider`] when no session is in scope.
pub fn use_session() -> SessionContext {
    match require_session() {
        Ok(session) => session,
        Err(err) => panic!("{err}"),
    }
}
