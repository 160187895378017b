//! Internal API response types for OMDb.
//!
//! These types are internal to `movielib-omdb` and are not exposed to
//! consumers. External consumers should use the `MovieMetadata` DTO
//! defined in `movielib-core`.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the OMDb client.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Base URL for the OMDb API (default: <https://www.omdbapi.com/>)
    pub base_url: Url,
    /// API key sent with every request
    pub api_key: Option<String>,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://www.omdbapi.com/")
                .expect("default OMDb API URL is valid"),
            api_key: None,
            user_agent: concat!("movielib-omdb/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Response envelope for a lookup-by-title request.
///
/// OMDb reports both outcomes with HTTP 200: `Response` is `"True"` with
/// the data fields populated, or `"False"` with `Error` set. Data fields
/// the service has no value for carry the literal string `"N/A"`.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbTitleResponse {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbTitleResponse {
    /// Whether OMDb reported the lookup as successful.
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}
