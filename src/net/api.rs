//! REST client for the identity and session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides the HTTP exchange, login/refresh persist the returned tokens and
//! logout clears them. The session manager never writes the markers itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::User;
use crate::config::ApiConfig;
use crate::state::session::AuthApi;
#[cfg(feature = "hydrate")]
use crate::config::{LOGIN_PATH, LOGOUT_PATH, ME_PATH, REFRESH_PATH};
#[cfg(feature = "hydrate")]
use crate::util::credentials::{self, CredentialMarker};

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a response status onto `Ok` or [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn check_status(operation: &'static str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { operation, status })
    }
}

#[cfg(feature = "hydrate")]
fn network_error(operation: &'static str, err: &gloo_net::Error) -> ApiError {
    ApiError::Network { operation, detail: err.to_string() }
}

#[cfg(feature = "hydrate")]
fn decode_error(operation: &'static str, err: &gloo_net::Error) -> ApiError {
    ApiError::Decode { operation, detail: err.to_string() }
}

#[cfg(feature = "hydrate")]
fn with_access_token(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match credentials::load(CredentialMarker::Access) {
        Some(token) => request.header("Authorization", &bearer_value(&token)),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
fn persist_tokens(tokens: &super::types::TokenPair) {
    credentials::store(CredentialMarker::Access, &tokens.access_token);
    if let Some(refresh) = tokens.refresh_token.as_deref() {
        credentials::store(CredentialMarker::Refresh, refresh);
    }
}

/// [`AuthApi`] over the back-office REST endpoints.
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AuthApi for HttpAuthApi {
    /// `GET /api/auth/me` with the stored access token.
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            const OP: &str = "me";
            let request = with_access_token(gloo_net::http::Request::get(&self.config.endpoint(ME_PATH)));
            let resp = request.send().await.map_err(|e| network_error(OP, &e))?;
            check_status(OP, resp.status())?;
            resp.json::<User>().await.map_err(|e| decode_error(OP, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/login`; stores both returned tokens.
    async fn login(&self, identifier: &str, secret: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{LoginRequest, LoginResponse};

            const OP: &str = "login";
            let body = LoginRequest { username: identifier, password: secret };
            let resp = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .json(&body)
                .map_err(|e| network_error(OP, &e))?
                .send()
                .await
                .map_err(|e| network_error(OP, &e))?;
            check_status(OP, resp.status())?;
            let LoginResponse { tokens, user } = resp.json().await.map_err(|e| decode_error(OP, &e))?;
            persist_tokens(&tokens);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, secret);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/logout`; clears both tokens once the server accepts.
    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            const OP: &str = "logout";
            let request = with_access_token(gloo_net::http::Request::post(&self.config.endpoint(LOGOUT_PATH)));
            let resp = request.send().await.map_err(|e| network_error(OP, &e))?;
            check_status(OP, resp.status())?;
            credentials::clear_all();
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/refresh-token` with the stored refresh token.
    async fn refresh_session(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{RefreshRequest, TokenPair};

            const OP: &str = "refresh";
            let refresh_token = credentials::load(CredentialMarker::Refresh).ok_or(ApiError::MissingCredential {
                operation: OP,
                marker: CredentialMarker::Refresh.storage_key(),
            })?;
            let body = RefreshRequest { refresh_token: &refresh_token };
            let resp = gloo_net::http::Request::post(&self.config.endpoint(REFRESH_PATH))
                .json(&body)
                .map_err(|e| network_error(OP, &e))?
                .send()
                .await
                .map_err(|e| network_error(OP, &e))?;
            check_status(OP, resp.status())?;
            let tokens: TokenPair = resp.json().await.map_err(|e| decode_error(OP, &e))?;
            persist_tokens(&tokens);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
