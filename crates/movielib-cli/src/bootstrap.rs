//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the one-shot CLI commands: the storage backend is selected via the
//! store factory and the OMDb client (or its no-op stand-in) constructed.
//! The `serve` command goes through the Axum adapter's own bootstrap
//! instead.

use std::path::Path;
use std::sync::Arc;

use movielib_core::ports::{MetadataLookup, NoopMetadataLookup};
use movielib_core::services::LibraryService;
use movielib_omdb::{DefaultOmdbClient, OmdbClientConfig};
use movielib_store::{StoreFactory, StoreKind};

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The composed library service.
    pub library: LibraryService,
}

/// Compose the library service for one-shot commands.
pub fn bootstrap(store: StoreKind, data_file: &Path, omdb_api_key: Option<String>) -> CliContext {
    tracing::debug!(
        store_kind = %store,
        data_file = %data_file.display(),
        lookup_configured = omdb_api_key.is_some(),
        "CLI bootstrap resolved configuration"
    );

    let repo = StoreFactory::build_repository(store, data_file);

    let metadata: Arc<dyn MetadataLookup> = match omdb_api_key {
        Some(key) => Arc::new(DefaultOmdbClient::new(
            &OmdbClientConfig::new().with_api_key(key),
        )),
        None => Arc::new(NoopMetadataLookup),
    };

    CliContext {
        library: LibraryService::new(repo, metadata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_composes_a_working_service() {
        let dir = TempDir::new().unwrap();
        let ctx = bootstrap(StoreKind::Json, &dir.path().join("library.json"), None);

        let user = ctx.library.add_user("Alice").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(ctx.library.list_users().await.unwrap().len(), 1);
    }
}
