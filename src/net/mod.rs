//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and `error`
//! classifies failures for the session layer.

pub mod api;
pub mod error;
pub mod types;
