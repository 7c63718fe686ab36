//! Environment configuration for the server.

use std::env::VarError;

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set, created next to the binary on first run.
pub static DEFAULT_DATABASE_URL: &str = "sqlite://pkmnlog.db?mode=rwc";

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Connection URL of the database holding playthroughs and entries.
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with `DATABASE_URL` or its default
    /// - `Err(ConfigError::InvalidEnvValue)` - `DATABASE_URL` is empty or not valid unicode
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Ok(url) if url.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "DATABASE_URL".to_string(),
                    reason: "must not be empty".to_string(),
                })
            }
            Ok(url) => url,
            Err(VarError::NotPresent) => DEFAULT_DATABASE_URL.to_string(),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "DATABASE_URL".to_string(),
                    reason: "must be valid unicode".to_string(),
                })
            }
        };

        Ok(Self { database_url })
    }
}
