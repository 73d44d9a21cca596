//! Configuration for the inventory CLI

use core_config::env_or_default;

/// Default API server address
const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Inventory API server
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = env_or_default("INVENTORY_API_URL", DEFAULT_API_URL);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
