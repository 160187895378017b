//! Request and response DTOs for the JSON API.

use movielib_core::domain::{MovieUpdate, NewMovie, User};
use serde::{Deserialize, Serialize};

/// A user row in the listing, without the embedded collection.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: u32,
    pub name: String,
    pub movie_count: usize,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            movie_count: user.movies.len(),
        }
    }
}

/// Body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
}

/// Body for `POST /api/users/{id}/movies`.
#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    pub name: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    /// Optional; when absent the poster is resolved by metadata lookup.
    #[serde(default)]
    pub poster: Option<String>,
}

impl From<AddMovieRequest> for NewMovie {
    fn from(req: AddMovieRequest) -> Self {
        Self {
            name: req.name,
            director: req.director,
            year: req.year,
            rating: req.rating,
            poster: req.poster,
        }
    }
}

/// Body for `PUT /api/users/{id}/movies/{movie_id}`.
///
/// Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMovieRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub poster: Option<String>,
}

impl From<UpdateMovieRequest> for MovieUpdate {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            name: req.name,
            director: req.director,
            year: req.year,
            rating: req.rating,
            poster: req.poster,
        }
    }
}

/// Query for `GET /api/users/search`.
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub name: String,
}

/// Query for `GET /api/stats/top-rated`.
#[derive(Debug, Deserialize)]
pub struct TopRatedQuery {
    #[serde(default = "default_top_rated_limit")]
    pub limit: usize,
}

fn default_top_rated_limit() -> usize {
    10
}
