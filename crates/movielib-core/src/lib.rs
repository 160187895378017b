#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Movie, MovieUpdate, NewMovie, User};
pub use ports::{
    LibraryRepository, MetadataLookup, MetadataLookupError, MetadataResult, MovieMetadata,
    NoopMetadataLookup, RepositoryError,
};
pub use services::LibraryService;
