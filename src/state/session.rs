//! Session manager: restores, logs in, and logs out the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One manager exists per mounted `AuthProvider`. It is the only writer of
//! [`AuthState`]; components read the state and call `login`/`logout`.
//!
//! DESIGN
//! ======
//! Remote calls, marker storage, and the state cell sit behind small traits so
//! the restoration sequence runs unchanged against the browser (`gloo-net`,
//! `localStorage`, `RwSignal`) and against in-memory fakes in tests.
//!
//! Restoration is strictly sequential: fetch user, then at most one refresh,
//! then at most one more fetch. There is no timeout; a remote call that never
//! settles leaves `loading` set until the future is dropped.
//!
//! ERROR HANDLING
//! ==============
//! Restoration failures end signed-out and are only logged. Login/logout
//! failures return the [`ApiError`] unchanged and leave state untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::credentials::CredentialMarker;

/// Identity and session remote operations.
///
/// Futures are not required to be `Send`: browser fetch futures are not.
pub trait AuthApi {
    /// Fetch the user for the current session. Fails without a valid session.
    fn fetch_current_user(&self) -> impl Future<Output = Result<User, ApiError>>;

    /// Exchange credentials for a session. Persists the credential markers.
    fn login(&self, identifier: &str, secret: &str) -> impl Future<Output = Result<User, ApiError>>;

    /// End the session. Clears the credential markers.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// Renew an expired session from the refresh marker.
    fn refresh_session(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// Read-only view of the persisted credential markers.
pub trait CredentialStore {
    fn has(&self, marker: CredentialMarker) -> bool;
}

/// Cell holding the published [`AuthState`].
pub trait SessionCell {
    fn snapshot(&self) -> AuthState;
    fn modify(&self, f: impl FnOnce(&mut AuthState));
}

impl SessionCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}

impl SessionCell for RefCell<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

impl<T: SessionCell> SessionCell for Rc<T> {
    fn snapshot(&self) -> AuthState {
        (**self).snapshot()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        (**self).modify(f);
    }
}

/// Contract violations by code using the session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("session accessed outside provider scope; wrap the tree in <AuthProvider>")]
    OutsideProvider,
    #[error("session restoration already ran for this provider")]
    AlreadyInitialized,
}

/// How startup restoration ended.
///
/// The published state only says signed in or not; this keeps the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// At least one credential marker was missing; nothing was called.
    NoCredentials,
    /// The first identity fetch succeeded.
    Restored,
    /// The session was renewed and the second fetch succeeded.
    RestoredAfterRefresh,
    /// The refresh call failed.
    RefreshFailed,
    /// Refresh succeeded but the second fetch failed.
    RetryFailed,
}

impl RestoreOutcome {
    pub fn is_signed_in(self) -> bool {
        matches!(self, Self::Restored | Self::RestoredAfterRefresh)
    }
}

/// Clears `loading` when restoration ends, however it ends.
struct LoadingGuard<'a, S: SessionCell>(&'a S);

impl<S: SessionCell> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.modify(|state| state.loading = false);
    }
}

pub struct SessionManager<A, C, S> {
    api: A,
    credentials: C,
    state: S,
    started: AtomicBool,
}

impl<A, C, S> SessionManager<A, C, S>
where
    A: AuthApi,
    C: CredentialStore,
    S: SessionCell,
{
    /// Create a manager and publish the initializing state into `state`.
    pub fn new(api: A, credentials: C, state: S) -> Self {
        state.modify(|s| *s = AuthState::initializing());
        Self { api, credentials, state, started: AtomicBool::new(false) }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.snapshot()
    }

    /// Restore the session from persisted markers. Runs once per manager.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::AlreadyInitialized`] on any call after the first;
    /// the repeat call touches neither the state nor the remote API.
    pub async fn initialize(&self) -> Result<RestoreOutcome, UsageError> {
        if self.started.swap(true, Ordering::AcqRel) {
            return Err(UsageError::AlreadyInitialized);
        }
        let _loading = LoadingGuard(&self.state);
        let outcome = self.restore().await;
        log::debug!("session restore finished: {outcome:?}");
        Ok(outcome)
    }

    async fn restore(&self) -> RestoreOutcome {
        let has_access = self.credentials.has(CredentialMarker::Access);
        let has_refresh = self.credentials.has(CredentialMarker::Refresh);
        if !(has_access && has_refresh) {
            return RestoreOutcome::NoCredentials;
        }

        match self.api.fetch_current_user().await {
            Ok(user) => {
                self.set_user(Some(user));
                return RestoreOutcome::Restored;
            }
            Err(err) => log::warn!("session restore: fetching current user failed ({err}); refreshing"),
        }

        if let Err(err) = self.api.refresh_session().await {
            log::error!("Authentication failed, please log in again. ({err})");
            self.set_user(None);
            return RestoreOutcome::RefreshFailed;
        }

        match self.api.fetch_current_user().await {
            Ok(user) => {
                self.set_user(Some(user));
                RestoreOutcome::RestoredAfterRefresh
            }
            Err(err) => {
                log::error!("Authentication failed, please log in again. ({err})");
                self.set_user(None);
                RestoreOutcome::RetryFailed
            }
        }
    }

    /// Sign in and publish the returned user.
    ///
    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unchanged; state is not modified.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), ApiError> {
        let user = self.api.login(identifier, secret).await?;
        self.set_user(Some(user));
        Ok(())
    }

    /// Sign out and clear the current user, even if none was set.
    ///
    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unchanged; state is not modified.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.api.logout().await?;
        self.set_user(None);
        Ok(())
    }

    fn set_user(&self, user: Option<User>) {
        self.state.modify(|state| state.user = user);
    }
}
