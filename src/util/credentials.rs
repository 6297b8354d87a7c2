//! Persisted credential markers in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST layer writes and clears the tokens; the session manager only asks
//! whether they are present. Token contents are never inspected here.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a blocked or missing `localStorage` reads as
//! "no marker", which degrades to a signed-out start instead of a crash.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::state::session::CredentialStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// One of the two persisted tokens that drive session restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialMarker {
    Access,
    Refresh,
}

impl CredentialMarker {
    pub const ALL: [Self; 2] = [Self::Access, Self::Refresh];

    /// The `localStorage` key holding this marker.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Access => AUTH_TOKEN_KEY,
            Self::Refresh => REFRESH_TOKEN_KEY,
        }
    }
}

impl std::fmt::Display for CredentialMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Empty strings count as absent.
#[cfg(any(test, feature = "hydrate"))]
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

/// Read the stored value for `marker`.
pub fn load(marker: CredentialMarker) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        non_empty(storage.get_item(marker.storage_key()).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = marker;
        None
    }
}

/// Persist `value` for `marker`.
pub fn store(marker: CredentialMarker, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {marker} not persisted");
            return;
        };
        let _ = storage.set_item(marker.storage_key(), value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (marker, value);
    }
}

/// Remove both markers.
pub fn clear_all() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for marker in CredentialMarker::ALL {
            let _ = storage.remove_item(marker.storage_key());
        }
    }
}

/// [`CredentialStore`] backed by browser `localStorage`.
///
/// Outside the browser no marker is ever present.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn has(&self, marker: CredentialMarker) -> bool {
        load(marker).is_some()
    }
}
