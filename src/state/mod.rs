//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` is the plain snapshot components render from, `session` owns the
//! restoration and login/logout flow, and `context` scopes one session to an
//! `AuthProvider` subtree.

pub mod auth;
pub mod context;
pub mod session;
