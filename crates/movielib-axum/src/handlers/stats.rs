//! Stats handlers - cross-user aggregate queries.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};

use movielib_core::domain::Movie;

use crate::dto::TopRatedQuery;
use crate::error::HttpError;
use crate::state::AppState;

/// The highest-rated movies across all users.
pub async fn top_rated(
    State(state): State<AppState>,
    Query(query): Query<TopRatedQuery>,
) -> Result<Json<Vec<Movie>>, HttpError> {
    Ok(Json(state.library.top_rated_movies(query.limit).await?))
}

/// Movie count per release year.
pub async fn by_year(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<i32, usize>>, HttpError> {
    Ok(Json(state.library.movie_count_per_year().await?))
}
