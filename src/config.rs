use std::env;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY environment variable is not set.")]
    MissingApiKey,

    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = var_or("PORT", "5000");
        let port = port
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort {
                value: port.clone(),
                source,
            })?;

        Ok(Self {
            api_key,
            base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            host: var_or("HOST", "127.0.0.1"),
            port,
            log_level: var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL`; `default_level` applies when neither is set.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(true).init();
}
