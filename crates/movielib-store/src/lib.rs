#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;

// Re-export factory for convenient access
pub use factory::{StoreFactory, StoreKind};

// Re-export store implementations
pub use repositories::{
    CodecError, CsvCodec, CsvLibraryStore, DocumentCodec, FlatFileLibrary, JsonCodec,
    JsonLibraryStore,
};
