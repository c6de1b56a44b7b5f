//! Process configuration from environment. Call `dotenvy::dotenv()` before
//! reading so a local `.env` file is honored.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl Settings {
    /// Read settings once at startup. Unset variables fall back to defaults;
    /// a set-but-malformed value is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/product_api".into());
        let bind_addr = env_parsed("BIND_ADDR", "0.0.0.0:3000")?;
        let max_connections = env_parsed("MAX_CONNECTIONS", "5")?;
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

fn env_parsed<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
