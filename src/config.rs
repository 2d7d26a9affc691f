//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 8000
    /// - `ACTIVITIES_SEED_PATH`: YAML catalogue replacing the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or `HOST` is
    /// set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_HOST.to_owned(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let seed_path = lookup("ACTIVITIES_SEED_PATH")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, seed_path })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
