//! API endpoint configuration.
//!
//! The client is a static WASM bundle, so overrides are baked in at build
//! time through `option_env!` instead of read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const REFRESH_PATH: &str = "/api/auth/refresh-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

/// `BACKOFFICE_API_BASE_URL` at build time names the API origin; unset or
/// empty means same origin.
impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("BACKOFFICE_API_BASE_URL").unwrap_or_default())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or same-origin relative) URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
