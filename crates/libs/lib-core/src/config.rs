//! # Gateway Configuration
//!
//! Configuration is read from environment variables (optionally seeded from a
//! `.env` file by the binaries) and validated on startup to fail fast.
//!
//! | Variable | Default |
//! |---|---|
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5515` |
//! | `DB_NAME` | `postgres` |
//! | `DB_USER` | `postgres` |
//! | `DB_PASS` | `postgres` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8000` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | `30` |
//! | `DB_CALL_TIMEOUT_SECS` | `30` |
//! | `CORS_ALLOWED_ORIGINS` | empty |
//!
//! The config is an ordinary value handed to the store and the server at
//! startup; there is no global instance.

use crate::error::{AppError, Result};
use lib_utils::envs::parse_value;
use lib_utils::validation::{validate_not_empty, validate_positive};
use std::str::FromStr;
use std::time::Duration;

/// Gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,

    /// Listen host for the HTTP server
    pub host: String,
    /// Listen port for the HTTP server
    pub port: u16,

    /// Upper bound of pooled database handles
    pub db_max_connections: u32,
    /// How long a request waits for a free handle before failing
    pub db_acquire_timeout: Duration,
    /// Bound on one whole invocation (acquire + query)
    pub db_call_timeout: Duration,

    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_port: 5515,
            db_name: "postgres".to_string(),
            db_user: "postgres".to_string(),
            db_password: "postgres".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            db_max_connections: 10,
            db_acquire_timeout: Duration::from_secs(30),
            db_call_timeout: Duration::from_secs(30),
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |name: &str, default: String| lookup(name).unwrap_or(default);

        Ok(Self {
            db_host: text("DB_HOST", defaults.db_host),
            db_port: parsed(&lookup, "DB_PORT", defaults.db_port)?,
            db_name: text("DB_NAME", defaults.db_name),
            db_user: text("DB_USER", defaults.db_user),
            db_password: text("DB_PASS", defaults.db_password),
            host: text("HOST", defaults.host),
            port: parsed(&lookup, "PORT", defaults.port)?,
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_acquire_timeout: Duration::from_secs(parsed(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.db_acquire_timeout.as_secs(),
            )?),
            db_call_timeout: Duration::from_secs(parsed(
                &lookup,
                "DB_CALL_TIMEOUT_SECS",
                defaults.db_call_timeout.as_secs(),
            )?),
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.db_host, "DB_HOST").map_err(AppError::Config)?;
        validate_not_empty(&self.db_name, "DB_NAME").map_err(AppError::Config)?;
        validate_not_empty(&self.host, "HOST").map_err(AppError::Config)?;
        validate_positive(u64::from(self.db_port), "DB_PORT").map_err(AppError::Config)?;
        validate_positive(u64::from(self.port), "PORT").map_err(AppError::Config)?;
        validate_positive(u64::from(self.db_max_connections), "DB_MAX_CONNECTIONS")
            .map_err(AppError::Config)?;
        validate_positive(self.db_acquire_timeout.as_secs(), "DB_ACQUIRE_TIMEOUT_SECS")
            .map_err(AppError::Config)?;
        validate_positive(self.db_call_timeout.as_secs(), "DB_CALL_TIMEOUT_SECS")
            .map_err(AppError::Config)?;
        Ok(())
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Database location for logs (no credentials).
    pub fn db_location(&self) -> String {
        format!("{}:{}/{}", self.db_host, self.db_port, self.db_name)
    }
}

fn parsed<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => parse_value(name, &raw).map_err(|_| {
            AppError::Config(format!("{} must be a valid number, got '{}'", name, raw))
        }),
        None => Ok(default),
    }
}

// endregion: --- Tests
