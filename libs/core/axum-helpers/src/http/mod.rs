//! HTTP middleware for Axum applications.
//!
//! This module provides:
//! - CORS layer construction (explicit origins or permissive fallback)
//! - Security headers middleware

pub mod cors;
pub mod security;

pub use cors::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
