//! Metadata lookup port trait.
//!
//! The core domain uses this port to resolve a movie title to descriptive
//! metadata (notably a poster URL) from an external service. The
//! production implementation lives in `movielib-omdb`.

use async_trait::async_trait;
use thiserror::Error;

/// Descriptive movie metadata resolved from an external lookup service.
///
/// Core-owned DTO; no wire-format types leak through the port. Fields the
/// service could not provide are `None` - in particular, "the service
/// knows no poster" is a successful lookup with `poster: None`, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    /// Canonical title as the service reports it.
    pub title: String,
    /// Release year, when parseable.
    pub year: Option<i32>,
    /// Director, when reported.
    pub director: Option<String>,
    /// Rating on a 0-10 scale, when reported.
    pub rating: Option<f64>,
    /// Poster image URL, when one exists.
    pub poster: Option<String>,
}

/// Errors from metadata lookup operations.
///
/// Failure classes are kept distinct so callers can choose a fallback per
/// class; none of them may ever be stored in place of a poster URL.
#[derive(Debug, Error)]
pub enum MetadataLookupError {
    /// The service has no record for the title.
    #[error("No metadata found for title '{title}'")]
    TitleNotFound {
        /// The title that was looked up
        title: String,
    },

    /// The request exceeded the client's bounded timeout.
    #[error("Metadata lookup timed out")]
    Timeout,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("Metadata lookup failed with status {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be understood.
    #[error("Invalid metadata response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client is not usable as configured (e.g. no API key).
    #[error("Metadata lookup configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for metadata lookup operations.
pub type MetadataResult<T> = Result<T, MetadataLookupError>;

/// Port trait for resolving movie titles to metadata.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Resolve a movie title to descriptive metadata.
    async fn lookup_title(&self, title: &str) -> MetadataResult<MovieMetadata>;
}

/// Lookup that always reports missing configuration.
///
/// Wired in when no API key is configured, so the rest of the system runs
/// without enrichment instead of refusing to start.
pub struct NoopMetadataLookup;

#[async_trait]
impl MetadataLookup for NoopMetadataLookup {
    async fn lookup_title(&self, _title: &str) -> MetadataResult<MovieMetadata> {
        Err(MetadataLookupError::Configuration {
            message: "metadata lookup is not configured".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn MetadataLookup>) {}

    #[test]
    fn test_error_display() {
        let err = MetadataLookupError::TitleNotFound {
            title: "Blade Runner".to_string(),
        };
        assert!(err.to_string().contains("Blade Runner"));

        let err = MetadataLookupError::RequestFailed { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_noop_lookup_reports_configuration_error() {
        let lookup = NoopMetadataLookup;
        let result = lookup.lookup_title("Heat").await;
        assert!(matches!(
            result,
            Err(MetadataLookupError::Configuration { .. })
        ));
    }
}
