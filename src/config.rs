//! Configuration Module
//!
//! Handles loading and validating service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::MAX_LIMIT;

// == Defaults ==
/// Default number of users whose recommendations are cached
pub const DEFAULT_CACHE_MAX_SIZE: usize = 1000;
/// Default freshness window for cached recommendations, in seconds
pub const DEFAULT_CACHE_TTL: u64 = 3600;
/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8000;
/// Default number of recommendations per request
pub const DEFAULT_LIMIT: usize = 10;

// == Cache Config ==
/// Validated cache parameters, fixed for the lifetime of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    max_size: usize,
    ttl: Duration,
}

impl CacheConfig {
    /// Creates a cache configuration.
    ///
    /// Returns `ConfigError::ZeroCapacity` if `max_size` is zero. A zero TTL
    /// is accepted and makes every stored entry stale on its next read.
    pub fn new(max_size: usize, ttl_seconds: u64) -> Result<Self, ConfigError> {
        Self::with_ttl(max_size, Duration::from_secs(ttl_seconds))
    }

    /// Like [`CacheConfig::new`] with a sub-second TTL.
    pub fn with_ttl(max_size: usize, ttl: Duration) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self { max_size, ttl })
    }

    /// Maximum number of held entries
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Freshness window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_CACHE_MAX_SIZE,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL),
        }
    }
}

// == Service Config ==
/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of users held in the recommendation cache
    pub cache_max_size: usize,
    /// Cache entry TTL in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Recommendations returned when a request does not give a limit
    pub default_limit: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cached users (default: 1000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DEFAULT_LIMIT` - Default recommendations per request (default: 10)
    ///
    /// Unset variables fall back to their default; set but unparsable ones
    /// are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            cache_max_size: env_or("CACHE_MAX_SIZE", DEFAULT_CACHE_MAX_SIZE)?,
            cache_ttl: env_or("CACHE_TTL", DEFAULT_CACHE_TTL)?,
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            default_limit: env_or("DEFAULT_LIMIT", DEFAULT_LIMIT)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that have to be valid before the service starts.
    ///
    /// The cache needs a non-zero capacity and the default limit must
    /// itself pass the per-request limit rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache_config()?;
        check_default_limit(self.default_limit)?;
        Ok(())
    }

    /// Builds the validated cache configuration.
    pub fn cache_config(&self) -> Result<CacheConfig, ConfigError> {
        CacheConfig::new(self.cache_max_size, self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_size: DEFAULT_CACHE_MAX_SIZE,
            cache_ttl: DEFAULT_CACHE_TTL,
            server_port: DEFAULT_SERVER_PORT,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Rejects a default limit that a request could not ask for itself.
pub fn check_default_limit(limit: usize) -> Result<usize, ConfigError> {
    if (1..=MAX_LIMIT as usize).contains(&limit) {
        Ok(limit)
    } else {
        Err(ConfigError::InvalidLimit(limit))
    }
}

/// Reads and parses `var`, returning `default` when it is unset.
fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(default),
    }
}
