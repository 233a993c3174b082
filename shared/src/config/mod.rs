//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `retry` - Retry policy for payment provider calls
//!
//! The shared package reads no configuration on its own; services build a
//! [`SharedConfig`] at startup and pass the pieces where they are needed.

pub mod environment;
pub mod retry;

use serde::{Deserialize, Serialize};

use crate::errors::SharedResult;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use retry::RetryConfig;

/// Configuration consumed by the shared package
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SharedConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Payment retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for SharedConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            retry: RetryConfig::default(),
        }
    }
}

impl SharedConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            logging: LoggingConfig::for_environment(Environment::Development),
            retry: RetryConfig::development(),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            logging: LoggingConfig::for_environment(Environment::Production),
            retry: RetryConfig::production(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// The environment-specific .env file is loaded first if present, then
    /// `STRIPE_RETRY_*` variables override the retry defaults.
    pub fn from_env() -> SharedResult<Self> {
        let env = Environment::from_env();
        if dotenvy::from_filename(env.env_file()).is_err() {
            tracing::debug!(file = env.env_file(), "No environment file loaded");
        }

        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => Self {
                environment: Environment::Staging,
                logging: LoggingConfig::for_environment(Environment::Staging),
                retry: RetryConfig::production(),
            },
        };
        config.retry = config.retry.with_env_overrides()?;
        Ok(config)
    }

    pub fn validate(&self) -> SharedResult<()> {
        self.retry.validate()
    }
}
