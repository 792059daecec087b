//! Configuration management for the to-do screen.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file is honoured by the binary (via `dotenvy`) before this runs.

use crate::error::ConfigError;
use crate::seed::{DEFAULT_SEED_COUNT, MAX_SEED_COUNT};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use todoer_runtime::StoreConfig;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoerConfig {
    /// Number of sample items at startup (`TODOER_SEED_COUNT`, default 4, at most 100)
    pub seed_count: usize,
    /// Toast lifetime in milliseconds (`TODOER_TOAST_DURATION_MS`, default 3000)
    pub toast_duration_ms: u64,
    /// Tracing filter used when `RUST_LOG` is unset (`TODOER_LOG`)
    pub log_filter: String,
    /// How long shutdown waits for running timers (`TODOER_SHUTDOWN_TIMEOUT_MS`, default 500)
    pub shutdown_timeout_ms: u64,
}

impl Default for TodoerConfig {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            toast_duration_ms: 3_000,
            log_filter: "todoer=info,todoer_runtime=info".to_string(),
            shutdown_timeout_ms: 500,
        }
    }
}

impl TodoerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is present but cannot be
    /// parsed, or if the seed count is above [`MAX_SEED_COUNT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_count = parse_or(&lookup, "TODOER_SEED_COUNT", defaults.seed_count)?;
        if seed_count > MAX_SEED_COUNT {
            return Err(ConfigError::Invalid {
                key: "TODOER_SEED_COUNT",
                value: seed_count.to_string(),
            });
        }

        Ok(Self {
            seed_count,
            toast_duration_ms: parse_or(
                &lookup,
                "TODOER_TOAST_DURATION_MS",
                defaults.toast_duration_ms,
            )?,
            log_filter: lookup("TODOER_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            shutdown_timeout_ms: parse_or(
                &lookup,
                "TODOER_SHUTDOWN_TIMEOUT_MS",
                defaults.shutdown_timeout_ms,
            )?,
        })
    }

    /// Toast lifetime
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Store runtime settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(16, Duration::from_millis(self.shutdown_timeout_ms))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
