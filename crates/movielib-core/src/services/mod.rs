//! Core services - orchestration over the port traits.

pub mod library;

pub use library::LibraryService;
