// src/config.rs
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    allowed_origins: Vec<String>,
    rate_limit: Option<RateLimitConfig>,
}

/// One request is replenished every `replenish_interval_ms`, up to `burst_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub replenish_interval_ms: u64,
    pub burst_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://crossblog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_REPLENISH_INTERVAL_MS: u64 = 100;
const DEFAULT_BURST_SIZE: u32 = 20;

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to defaults; set but unparsable keys are an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric setting does not parse
    /// or `DATABASE_MAX_CONNECTIONS` is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .is_none_or(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        let rate_limit = if rate_limit_enabled {
            Some(RateLimitConfig {
                replenish_interval_ms: parse_or(
                    &lookup,
                    "RATE_LIMIT_REPLENISH_MS",
                    DEFAULT_REPLENISH_INTERVAL_MS,
                )?,
                burst_size: parse_or(&lookup, "RATE_LIMIT_BURST", DEFAULT_BURST_SIZE)?,
            })
        } else {
            None
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            allowed_origins,
            rate_limit,
        })
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Allowed CORS origins; empty means any origin.
    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    #[must_use]
    pub const fn rate_limit(&self) -> Option<RateLimitConfig> {
        self.rate_limit
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}")))
    })
}
