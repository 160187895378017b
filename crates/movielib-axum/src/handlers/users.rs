//! User handlers - listing, creation and search.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use movielib_core::domain::User;

use crate::dto::{AddUserRequest, UserSearchQuery, UserSummary};
use crate::error::HttpError;
use crate::state::AppState;

/// List all users as summaries.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, HttpError> {
    let users = state.library.list_users().await?;
    Ok(Json(users.iter().map(UserSummary::from).collect()))
}

/// Add a new user.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<User>), HttpError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(HttpError::BadRequest("user name must not be empty".to_string()));
    }
    let user = state.library.add_user(name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a single user with their movie collection.
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> Result<Json<User>, HttpError> {
    state
        .library
        .get_user(user_id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("user {user_id}")))
}

/// Exact-name search returning matching user ids.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<u32>>, HttpError> {
    Ok(Json(state.library.find_users_by_name(&query.name).await?))
}
