//! Client configuration.

use crate::error::{ClientError, Result};
use std::env;
use std::time::Duration;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.camposcloud.com/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration captured by a [`Client`](crate::Client) at construction.
///
/// Only the API token is required. Each client owns its configuration, so
/// several clients with different tokens can coexist in one process.
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer token sent with every request.
    api_token: String,
    /// Base URL of the API.
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the given API token and default settings.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CAMPOSCLOUD_API_TOKEN`: API token (required)
    /// - `CAMPOSCLOUD_BASE_URL`: Override the API endpoint
    /// - `CAMPOSCLOUD_TIMEOUT_SECS`: Request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the token is missing or the timeout
    /// is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("CAMPOSCLOUD_API_TOKEN").map_err(|_| {
            ClientError::Config("CAMPOSCLOUD_API_TOKEN is not set".to_string())
        })?;

        let mut config = Self::new(api_token);

        if let Ok(base_url) = env::var("CAMPOSCLOUD_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(secs) = env::var("CAMPOSCLOUD_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!(
                    "CAMPOSCLOUD_TIMEOUT_SECS must be a number of seconds, got: {}",
                    secs
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Point the client at a different API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom timeout for all requests.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("token");
        assert_eq!(config.api_token(), "token");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("token")
            .with_base_url("http://localhost:9000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
