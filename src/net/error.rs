//! Error type for auth REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a remote auth operation.
///
/// Login/logout surface this to the caller unchanged. During session
/// restoration it is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("{operation} request failed: {detail}")]
    Network { operation: &'static str, detail: String },

    /// The server answered with a non-success status.
    #[error("{operation} failed: {status}")]
    Status { operation: &'static str, status: u16 },

    /// The response body did not match the expected schema.
    #[error("{operation} response invalid: {detail}")]
    Decode { operation: &'static str, detail: String },

    /// A required credential marker was missing locally.
    #[error("{operation} requires a stored {marker}")]
    MissingCredential { operation: &'static str, marker: &'static str },

    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the server rejected the credentials rather than the
    /// transport failing.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
