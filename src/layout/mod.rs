//! Layout configuration shared by the app shell.

pub mod constants;
