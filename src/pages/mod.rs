//! Route-level page components.

pub mod login;
pub mod section;
