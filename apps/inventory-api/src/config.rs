//! Configuration for Inventory API

use std::path::PathBuf;

use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Path of the JSON file holding the item collection
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let data_file = PathBuf::from(env_or_default("DATA_FILE", "data/items.json"));

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            data_file,
        })
    }
}
