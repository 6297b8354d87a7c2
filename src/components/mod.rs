//! Reusable UI components.

pub mod auth_provider;
pub mod page_header;
