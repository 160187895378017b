//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `LibraryService`.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::CorsConfig;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under
/// `/api`).
///
/// Returns a router typed as `Router<AppState>` but WITHOUT
/// `.with_state()` applied; the caller applies state before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Users API
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::add),
        )
        .route("/users/search", get(handlers::users::search))
        .route("/users/{id}", get(handlers::users::get))
        // Per-user movies API
        .route(
            "/users/{id}/movies",
            get(handlers::movies::list_for_user).post(handlers::movies::add_for_user),
        )
        .route(
            "/users/{id}/movies/{movie_id}",
            axum::routing::put(handlers::movies::update).delete(handlers::movies::remove),
        )
        // Cross-user movie queries
        .route("/movies/{movie_id}", get(handlers::movies::details))
        .route(
            "/movies/{movie_id}/users",
            get(handlers::movies::users_for_movie),
        )
        // Stats API
        .route("/stats/top-rated", get(handlers::stats::top_rated))
        .route("/stats/by-year", get(handlers::stats::by_year))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Create the main application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes().with_state(state))
        .layer(build_cors_layer(cors))
}
