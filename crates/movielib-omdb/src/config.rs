//! Public configuration for the OMDb client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Configuration for the OMDb client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use movielib_omdb::OmdbClientConfig;
/// use std::time::Duration;
///
/// let config = OmdbClientConfig::new()
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct OmdbClientConfig {
    /// Base URL for the OMDb API
    pub(crate) base_url: String,
    /// API key; required for every request
    pub(crate) api_key: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; every lookup is bounded by this
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for OmdbClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: None,
            user_agent: concat!("movielib-omdb/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl OmdbClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the OMDb API.
    ///
    /// Defaults to `https://www.omdbapi.com/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
