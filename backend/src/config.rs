use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::auth_service::{DEFAULT_PASSWORD_HASH, DEFAULT_USERNAME};

/// Runtime settings. Every key can be overridden by the environment
/// variable of the same name in upper case (`PORT`, `DATABASE_URL`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub auth_username: String,
    pub auth_password_hash: String,
}

impl Settings {
    /// Builder preloaded with the defaults.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("database_url", "sqlite:coroinhas.db")?
            .set_default("database_max_connections", 5)?
            .set_default("database_acquire_timeout_secs", 5)?
            .set_default("request_timeout_secs", 30)?
            .set_default("log_level", "info")?
            .set_default("auth_username", DEFAULT_USERNAME)?
            .set_default("auth_password_hash", DEFAULT_PASSWORD_HASH)?)
    }

    /// Loads defaults, then `coroinhas.toml` if present, then environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::with_name("coroinhas").required(false))
            .add_source(
                config::Environment::default()
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database_acquire_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads `.env` (if any) into the environment, then the settings.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
