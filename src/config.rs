use std::env;

use sea_orm::DatabaseConnection;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "blog_api=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let server_port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port))?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://blog.db?mode=rwc".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
