//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter: the storage backend is selected, the OMDb client
//! (or its no-op stand-in) constructed, and the library service composed.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use movielib_core::ports::{MetadataLookup, NoopMetadataLookup};
use movielib_core::services::LibraryService;
use movielib_omdb::{DefaultOmdbClient, OmdbClientConfig};
use movielib_store::{StoreFactory, StoreKind};

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Storage backend selected for the process lifetime.
    pub store_kind: StoreKind,
    /// Path of the dataset file.
    pub data_file: PathBuf,
    /// OMDb API key; `None` disables poster enrichment.
    pub omdb_api_key: Option<String>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with defaults: JSON store in `./movielib.json`,
    /// no enrichment.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 9878,
            store_kind: StoreKind::Json,
            data_file: PathBuf::from("movielib.json"),
            omdb_api_key: None,
            cors: CorsConfig::default(),
        }
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services for the web server.
pub struct AxumContext {
    /// The composed library service.
    pub library: Arc<LibraryService>,
}

/// Bootstrap the server context from configuration.
///
/// A missing OMDb key degrades to a no-lookup client with a startup
/// warning instead of refusing to start.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    tracing::info!(
        store_kind = %config.store_kind,
        data_file = %config.data_file.display(),
        lookup_configured = config.omdb_api_key.is_some(),
        "bootstrap resolved configuration"
    );

    let repo = StoreFactory::build_repository(config.store_kind, &config.data_file);

    let metadata: Arc<dyn MetadataLookup> = match &config.omdb_api_key {
        Some(key) => Arc::new(DefaultOmdbClient::new(
            &OmdbClientConfig::new().with_api_key(key),
        )),
        None => {
            tracing::warn!("no OMDb API key configured, movies will be stored without posters");
            Arc::new(NoopMetadataLookup)
        }
    };

    let library = Arc::new(LibraryService::new(repo, metadata));
    AxumContext { library }
}

/// Bootstrap and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config);
    let app = create_router(Arc::new(ctx), &config.cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
