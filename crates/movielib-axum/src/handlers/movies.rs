//! Movie handlers - per-user CRUD and cross-user queries.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use movielib_core::domain::Movie;

use crate::dto::{AddMovieRequest, UpdateMovieRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// List a user's movies.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> Result<Json<Vec<Movie>>, HttpError> {
    // Distinguish an unknown user from a user with an empty collection
    match state.library.get_user(user_id).await? {
        Some(user) => Ok(Json(user.movies)),
        None => Err(HttpError::NotFound(format!("user {user_id}"))),
    }
}

/// Add a movie to a user's collection, returning the updated collection.
pub async fn add_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
    Json(req): Json<AddMovieRequest>,
) -> Result<(StatusCode, Json<Vec<Movie>>), HttpError> {
    if req.name.trim().is_empty() {
        return Err(HttpError::BadRequest("movie title must not be empty".to_string()));
    }
    let movies = state.library.add_movie(user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(movies)))
}

/// Merge an update into an existing movie.
pub async fn update(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(u32, u32)>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<StatusCode, HttpError> {
    state
        .library
        .update_movie(user_id, movie_id, req.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a movie from a user's collection.
pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(u32, u32)>,
) -> Result<StatusCode, HttpError> {
    state.library.delete_movie(user_id, movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// First movie with the given id across all users.
pub async fn details(
    State(state): State<AppState>,
    Path(movie_id): Path<u32>,
) -> Result<Json<Movie>, HttpError> {
    state
        .library
        .find_movie(movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("movie {movie_id}")))
}

/// Ids of users holding a movie with the given id.
pub async fn users_for_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<u32>,
) -> Result<Json<Vec<u32>>, HttpError> {
    Ok(Json(state.library.users_with_movie(movie_id).await?))
}
