//! Database connection configuration.

use std::time::Duration;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a pooled connection before giving up.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("{key} is invalid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on pooled connections (defaults to 20).
    pub max_connections: u32,
    /// How long an operation waits for a free connection.
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// when one exists.
    ///
    /// | Variable                  | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `DATABASE_URL`            | yes      | —       |
    /// | `DB_MAX_CONNECTIONS`      | no       | `20`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | no       | `5`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let acquire_timeout_secs =
            parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
