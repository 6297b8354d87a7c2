//! Wire DTOs for the auth REST endpoints.
//!
//! DESIGN
//! ======
//! The identity service owns the user record shape. Known fields are typed;
//! anything else the server sends is kept in `profile` so a newer server
//! never breaks deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/me` and `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Human-readable name for headers and menus.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role name (e.g. `"admin"`, `"supervisor"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Remaining profile fields, passed through untouched.
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Name to show in the UI: full name when present, otherwise username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/auth/refresh-token`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Token pair issued by login and refresh.
///
/// Refresh responses may omit `refresh_token` when the server keeps the
/// existing one alive.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: User,
}
