//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No storage-format or HTTP-client types in any signature
//! - Repository methods mirror the data access contract one-to-one
//! - Every failure surfaces as an error value; format faults never escape
//!   as panics

pub mod library;
pub mod metadata;

use thiserror::Error;

pub use library::LibraryRepository;
pub use metadata::{
    MetadataLookup, MetadataLookupError, MetadataResult, MovieMetadata, NoopMetadataLookup,
};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (file
/// formats, I/O) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested user or movie was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing file exists but could not be parsed.
    ///
    /// Kept distinct from an absent file, which reads as the empty
    /// dataset. A malformed store is never silently degraded into an
    /// empty one.
    #[error("Malformed store: {0}")]
    Malformed(String),

    /// Storage backend I/O error (read or write).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serializing the dataset for writing failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepositoryError::NotFound("user 7".to_string());
        assert!(err.to_string().contains("user 7"));

        let err = RepositoryError::Malformed("line 3: expected integer".to_string());
        assert!(err.to_string().contains("line 3"));
    }
}
