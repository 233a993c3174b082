//! Retry policy configuration for payment provider calls

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{SharedError, SharedResult};

/// Backoff parameters used to compute retry delays
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Maximum number of attempts including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Upper bound for any computed delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Growth factor applied per attempt
    #[serde(default = "default_exponential_base")]
    pub exponential_base: f64,

    /// Additive random jitter, uniform in `[0, jitter_ms)`
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            exponential_base: default_exponential_base(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of attempts
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the base delay
    pub fn with_base_delay_ms(mut self, base_delay_ms: u64) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    /// Set the delay ceiling
    pub fn with_max_delay_ms(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Set the exponential growth factor
    pub fn with_exponential_base(mut self, exponential_base: f64) -> Self {
        self.exponential_base = exponential_base;
        self
    }

    /// Set the jitter range
    pub fn with_jitter_ms(mut self, jitter_ms: u64) -> Self {
        self.jitter_ms = jitter_ms;
        self
    }

    /// Whether another attempt is allowed after `attempt` attempts have run
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Check that the values describe a usable policy
    pub fn validate(&self) -> SharedResult<()> {
        if self.max_attempts == 0 {
            return Err(config_error("max_attempts", "must be at least 1"));
        }
        if !self.exponential_base.is_finite() || self.exponential_base < 1.0 {
            return Err(config_error(
                "exponential_base",
                "must be a finite number >= 1",
            ));
        }
        if self.max_delay_ms < self.base_delay_ms {
            return Err(config_error(
                "max_delay_ms",
                "must not be smaller than base_delay_ms",
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `STRIPE_RETRY_*` environment variables
    pub fn from_env() -> SharedResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Override fields from `STRIPE_RETRY_*` environment variables when set
    pub fn with_env_overrides(self) -> SharedResult<Self> {
        let config = Self {
            max_attempts: env_or("STRIPE_RETRY_MAX_ATTEMPTS", self.max_attempts)?,
            base_delay_ms: env_or("STRIPE_RETRY_BASE_DELAY_MS", self.base_delay_ms)?,
            max_delay_ms: env_or("STRIPE_RETRY_MAX_DELAY_MS", self.max_delay_ms)?,
            exponential_base: env_or("STRIPE_RETRY_EXPONENTIAL_BASE", self.exponential_base)?,
            jitter_ms: env_or("STRIPE_RETRY_JITTER_MS", self.jitter_ms)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a development configuration (short waits)
    pub fn development() -> Self {
        Self {
            max_attempts: 2,
            base_delay_ms: 250,
            max_delay_ms: 2000,
            ..Default::default()
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self::default()
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> SharedResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| config_error(key, format!("cannot parse '{}'", raw))),
        Err(_) => Ok(default),
    }
}

fn config_error(key: &str, reason: impl Into<String>) -> SharedError {
    SharedError::Config {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    10_000
}

fn default_exponential_base() -> f64 {
    2.0
}

fn default_jitter_ms() -> u64 {
    100
}
