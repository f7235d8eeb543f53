//! Process configuration read from the environment at startup.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors that can occur while loading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Credential for the completion provider.
    pub api_key: String,
    /// Alternative OpenAI-compatible base URL.
    pub api_base: Option<String>,
    pub port: u16,
}

impl ServerConfig {
    /// Loads `.env` (overriding existing variables) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_file(Path::new(".env"))
    }

    /// Loads the given dotenv file over the process environment, then reads it.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        // A missing file is fine; the variables may come from the real environment.
        dotenvy::from_path_override(path).ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let api_base = lookup("OPENAI_API_BASE").filter(|v| !v.is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { api_key, api_base, port })
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
