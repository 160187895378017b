//! HTTP backend abstraction for the OMDb API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{OmdbError, OmdbResult};
use crate::models::OmdbConfig;
use crate::url::redacted;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `MetadataLookup` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OmdbResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx) and
/// network errors. Every request carries the configured timeout, so a
/// lookup can never block past `timeout * (max_retries + 1)` plus the
/// backoff delays.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        }
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> OmdbResult<reqwest::Response> {
        let mut last_error: Option<OmdbError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(OmdbError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: redacted(url),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(OmdbError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: redacted(url),
                    });
                }
                Err(e) => {
                    let classified = classify_transport_error(e, url);
                    // Network errors and timeouts are retryable
                    if attempt < self.max_retries {
                        last_error = Some(classified);
                        continue;
                    }
                    return Err(classified);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| OmdbError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Map a reqwest transport error onto the internal taxonomy.
///
/// Timeouts get their own class so callers can distinguish "the bound was
/// hit" from "the network broke".
fn classify_transport_error(error: reqwest::Error, url: &Url) -> OmdbError {
    if error.is_timeout() {
        OmdbError::Timeout { url: redacted(url) }
    } else {
        OmdbError::Network(error)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OmdbResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let data: T = response
            .json()
            .await
            .map_err(|e| OmdbError::InvalidResponse {
                message: e.to_string(),
            })?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
