//! Composition utilities for building repositories over flat-file
//! backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic. The backend is selected once at startup and held behind
//! `Arc<dyn LibraryRepository>` for the process lifetime.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use movielib_core::ports::LibraryRepository;

use crate::repositories::{CsvLibraryStore, JsonLibraryStore};

/// The available storage formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Delimited-text table, one row per (user, movie) pair.
    Csv,
    /// Nested JSON document.
    Json,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown store kind '{other}' (expected csv or json)")),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Factory for creating repository instances over flat-file backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Build the repository for the selected backend.
    ///
    /// This is the recommended way for adapters to obtain a repository;
    /// the concrete store type never leaves this function.
    pub fn build_repository(
        kind: StoreKind,
        path: impl Into<PathBuf>,
    ) -> Arc<dyn LibraryRepository> {
        match kind {
            StoreKind::Csv => Arc::new(CsvLibraryStore::open(path)),
            StoreKind::Json => Arc::new(JsonLibraryStore::open(path)),
        }
    }
}
