//! OMDb client for resolving movie titles to metadata.
//!
//! This module provides the main client type. It is generic over an HTTP
//! backend so tests can inject canned responses; external code interacts
//! with it through the `MetadataLookup` port.

use url::Url;

use crate::config::OmdbClientConfig;
use crate::error::{OmdbError, OmdbResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{OmdbConfig, OmdbTitleResponse};
use crate::url::build_title_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default OMDb client using the reqwest HTTP backend.
pub type DefaultOmdbClient = OmdbClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the OMDb API.
///
/// The generic parameter `B` is an implementation detail - external code
/// should not instantiate this directly but use `DefaultOmdbClient::new()`.
pub struct OmdbClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: OmdbConfig,
}

impl DefaultOmdbClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &OmdbClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    fn to_internal_config(config: &OmdbClientConfig) -> OmdbConfig {
        OmdbConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://www.omdbapi.com/").expect("default URL is valid")
            }),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        }
    }
}

impl<B: HttpBackend> OmdbClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: OmdbConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch the raw response envelope for a title.
    ///
    /// OMDb reports "no such title" inside a 200 response, so the
    /// envelope is unwrapped here and surfaced as `TitleNotFound`.
    pub(crate) async fn fetch_title(&self, title: &str) -> OmdbResult<OmdbTitleResponse> {
        let url = build_title_url(&self.config, title)?;
        let response: OmdbTitleResponse = self.backend.get_json(&url).await?;

        if !response.is_success() {
            let message = response
                .error
                .unwrap_or_else(|| "no error message".to_string());
            if message.to_lowercase().contains("not found") {
                return Err(OmdbError::TitleNotFound {
                    title: title.to_string(),
                });
            }
            return Err(OmdbError::InvalidResponse { message });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub fn test_config() -> OmdbConfig {
        OmdbConfig {
            api_key: Some("test-key".to_string()),
            ..OmdbConfig::default()
        }
    }

    #[test]
    fn test_default_client_creation() {
        let config = OmdbClientConfig::new().with_api_key("k");
        let _client = DefaultOmdbClient::new(&config);
    }

    #[test]
    fn test_invalid_base_url_falls_back_to_default() {
        let config = OmdbClientConfig::new().with_base_url("not a url");
        let client = DefaultOmdbClient::new(&config);
        assert_eq!(client.config.base_url.as_str(), "https://www.omdbapi.com/");
    }

    #[tokio::test]
    async fn test_fetch_title_success() {
        let backend = FakeBackend::new().with_response(
            "t=Heat",
            json!({
                "Title": "Heat",
                "Year": "1995",
                "Director": "Michael Mann",
                "imdbRating": "8.3",
                "Poster": "https://m.media-amazon.com/images/heat.jpg",
                "Response": "True"
            }),
        );
        let client = OmdbClient::with_backend(test_config(), backend);

        let response = client.fetch_title("Heat").await.unwrap();
        assert_eq!(response.title.as_deref(), Some("Heat"));
    }

    #[tokio::test]
    async fn test_fetch_title_not_found() {
        let backend = FakeBackend::new().with_response(
            "t=No%20Such%20Film",
            json!({"Response": "False", "Error": "Movie not found!"}),
        );
        let client = OmdbClient::with_backend(test_config(), backend);

        let result = client.fetch_title("No Such Film").await;
        assert!(matches!(result, Err(OmdbError::TitleNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_title_other_failure_is_invalid_response() {
        let backend = FakeBackend::new().with_response(
            "t=Heat",
            json!({"Response": "False", "Error": "Daily request limit reached!"}),
        );
        let client = OmdbClient::with_backend(test_config(), backend);

        let result = client.fetch_title("Heat").await;
        assert!(matches!(result, Err(OmdbError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_fetch_title_without_api_key() {
        let backend = FakeBackend::new();
        let client = OmdbClient::with_backend(OmdbConfig::default(), backend);

        let result = client.fetch_title("Heat").await;
        assert!(matches!(result, Err(OmdbError::MissingApiKey)));
    }
}
