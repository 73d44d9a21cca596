//! Application state management.
//!
//! This module defines the shared application state passed to the route
//! builders.

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
}
