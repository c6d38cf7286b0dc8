//! Startup configuration for the weather provider.
//!
//! The API credential is resolved from the environment at startup and
//! never embedded in code or logged.

use std::env;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_VAR: &str = "OPENWEATHER_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the weather lookup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the current-weather API.
    pub base_url: String,

    /// API credential appended as the `appid` query parameter.
    pub api_key: String,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// City fetched once at startup, before any user input.
    pub default_city: String,
}

/// Configuration errors reported before the TUI is entered.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENWEATHER_API_KEY is not set; export it with your OpenWeatherMap API key")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Resolve configuration from the environment plus CLI values.
    pub fn from_env(default_city: impl Into<String>, timeout_secs: u64) -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let config = Self {
            base_url,
            api_key,
            timeout_secs,
            default_city: default_city.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration pointing at a mock server, for tests.
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: "test-key".into(),
            timeout_secs: 5,
            default_city: "London".into(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".into()));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::Invalid("api_key must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.default_city.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_city must not be empty".into(),
            ));
        }
        Ok(())
    }
}
