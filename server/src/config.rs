//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unknown ENV: {0} (expected 'development' or 'production')")]
    UnknownEnvironment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub env: Environment,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `ENV`: `development` (default) or `production`
    /// - `PORT`: default 8000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("ENV").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    pub fn from_values(env: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let env = parse_environment(env)?;
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { env, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_environment(raw: Option<&str>) -> Result<Environment, ConfigError> {
    match raw.map(str::trim).unwrap_or("") {
        "" | "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::UnknownEnvironment(other.to_owned())),
    }
}

/// Load `.env` outside production. A missing file is not an error.
pub fn load_dotenv() {
    if std::env::var("ENV").is_ok_and(|env| env.trim() == "production") {
        return;
    }
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file"),
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }
}
