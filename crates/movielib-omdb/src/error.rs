//! Internal error types for OMDb operations.
//!
//! These errors are internal to `movielib-omdb` and are mapped to the core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for OMDb operations.
pub type OmdbResult<T> = Result<T, OmdbError>;

/// Errors related to OMDb API operations.
///
/// URLs carried in error variants have the API key already redacted.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// API request failed with an HTTP error status.
    #[error("OMDb request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested (redacted)
        url: String,
    },

    /// The request exceeded the configured timeout.
    #[error("OMDb request timed out: {url}")]
    Timeout {
        /// The URL that was requested (redacted)
        url: String,
    },

    /// OMDb has no record for the title.
    #[error("Title '{title}' not found on OMDb")]
    TitleNotFound {
        /// The title that was looked up
        title: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from OMDb: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No API key is configured.
    #[error("OMDb API key is not configured")]
    MissingApiKey,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = OmdbError::ApiRequestFailed {
            status: 503,
            url: "https://www.omdbapi.com/?apikey=***&t=Heat".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("omdbapi.com"));
    }

    #[test]
    fn test_title_not_found_error_message() {
        let error = OmdbError::TitleNotFound {
            title: "No Such Film".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("No Such Film"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_missing_api_key_error_message() {
        assert!(
            OmdbError::MissingApiKey
                .to_string()
                .contains("not configured")
        );
    }
}
