//! User domain types.

use serde::{Deserialize, Serialize};

use super::movie::Movie;

/// A user and their owned movie collection.
///
/// User ids are unique across the whole dataset (max existing id + 1 on
/// insert, 1 when the dataset is empty). Movies are embedded by value, so
/// a movie can never outlive or be shared outside its owning user.
///
/// `movies` is an ordered sequence: encounter order is the order movies
/// were added, and it is the tie-break order for stable sorts over
/// collections (e.g. top-rated queries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Dataset-wide unique id.
    pub id: u32,
    /// Display name; not required to be unique.
    pub name: String,
    /// The user's movie collection. May be empty.
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl User {
    /// Look up a movie in this user's collection.
    #[must_use]
    pub fn movie(&self, movie_id: u32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    /// Mutable lookup of a movie in this user's collection.
    pub fn movie_mut(&mut self, movie_id: u32) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.id == movie_id)
    }

    /// Next free movie id for this collection (max existing id + 1, or 1
    /// when the collection is empty).
    #[must_use]
    pub fn next_movie_id(&self) -> u32 {
        self.movies.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}
