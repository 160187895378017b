//! Port trait implementation for `OmdbClient`.
//!
//! This module implements the core-owned `MetadataLookup` trait for
//! `OmdbClient`, handling the conversion between OMDb wire types and the
//! core DTO.

use async_trait::async_trait;

use movielib_core::ports::{MetadataLookup, MetadataLookupError, MetadataResult, MovieMetadata};

use crate::client::OmdbClient;
use crate::error::OmdbError;
use crate::http::HttpBackend;
use crate::parsing::{non_placeholder, parse_rating, parse_year};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `OmdbError` to core `MetadataLookupError`.
fn map_error(err: OmdbError) -> MetadataLookupError {
    match err {
        OmdbError::TitleNotFound { title } => MetadataLookupError::TitleNotFound { title },
        OmdbError::Timeout { .. } => MetadataLookupError::Timeout,
        OmdbError::ApiRequestFailed { status, .. } => {
            MetadataLookupError::RequestFailed { status }
        }
        OmdbError::InvalidResponse { message } => MetadataLookupError::InvalidResponse { message },
        OmdbError::MissingApiKey => MetadataLookupError::Configuration {
            message: "OMDb API key is not configured".to_string(),
        },
        OmdbError::Network(e) => {
            if e.is_timeout() {
                MetadataLookupError::Timeout
            } else {
                MetadataLookupError::Network {
                    message: e.to_string(),
                }
            }
        }
        OmdbError::InvalidUrl(e) => MetadataLookupError::Configuration {
            message: e.to_string(),
        },
        OmdbError::JsonParse(e) => MetadataLookupError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> MetadataLookup for OmdbClient<B> {
    async fn lookup_title(&self, title: &str) -> MetadataResult<MovieMetadata> {
        let response = self.fetch_title(title).await.map_err(map_error)?;

        Ok(MovieMetadata {
            title: non_placeholder(response.title).unwrap_or_else(|| title.to_string()),
            year: parse_year(response.year.as_deref()),
            director: non_placeholder(response.director),
            rating: parse_rating(response.imdb_rating.as_deref()),
            poster: non_placeholder(response.poster),
        })
    }
}
