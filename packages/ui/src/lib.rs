//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod auth;
pub use auth::{AuthContext, SignInPanel, use_auth, use_auth_provider};

pub mod admin;
