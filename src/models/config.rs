use std::env;

use thiserror::Error;

/// Runtime configuration loaded from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database URL handed to Diesel.
    pub database_url: String,
    /// Directory uploaded images are stored in and served from.
    pub uploads_dir: String,
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

impl ServerConfig {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `UPLOADS_DIR`, `HOST` and `PORT` fall
    /// back to local defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", value))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            uploads_dir,
            host,
            port,
        })
    }
}
