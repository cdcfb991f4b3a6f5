//! Process configuration.
//!
//! A [`Config`] is built once at start-up (the binary fills it from CLI flags
//! and environment variables) and then shared by reference. There is no
//! configuration file.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use breachbot::Config;
//!
//! let config = Config::new("https://leaks.example.com/api")?
//!     .with_timeout(Duration::from_secs(5))?
//!     .with_title("Leak Check");
//!
//! assert_eq!(config.timeout(), Duration::from_secs(5));
//! # Ok::<(), breachbot::config::ConfigError>(())
//! ```

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::render::DEFAULT_TITLE;

/// Default timeout for a single lookup request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone)]
pub struct Config {
    api_base_url: Url,
    timeout: Duration,
    title: String,
    user_agent: String,
}

impl Config {
    /// Creates a configuration for the lookup API at `api_base_url`.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self {
            api_base_url: url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            title: DEFAULT_TITLE.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
