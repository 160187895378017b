//! Library repository trait definition.
//!
//! This port defines the data access contract for users and their movie
//! collections. Implementations must handle all storage details
//! internally, including the full read-modify-rewrite cycle per mutating
//! operation.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Movie, MovieUpdate, NewMovie, User};

/// Repository for the user/movie dataset.
///
/// The dataset is a collection of users, each embedding an owned movie
/// collection. Implementations materialize the whole dataset per
/// operation and rewrite it in full on mutation; the contract stays
/// explicit about that so an incremental backend could satisfy it later.
///
/// # Design Rules
///
/// - No storage types in signatures
/// - Ids are assigned by the repository: max existing id + 1, or 1 when
///   empty; user ids are dataset-global, movie ids per-user
/// - An absent backing file reads as the empty dataset; a malformed one
///   is `Err(RepositoryError::Malformed)`
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// List all users with their embedded movie collections.
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// Get a user by id.
    ///
    /// Returns `Ok(None)` when the user doesn't exist; an existing user
    /// with no movies is `Ok(Some(..))` with an empty collection.
    async fn get_user(&self, user_id: u32) -> Result<Option<User>, RepositoryError>;

    /// Add a user with a fresh id and persist the dataset.
    ///
    /// Returns the persisted user. Fails only on an underlying storage
    /// fault.
    async fn add_user(&self, name: &str) -> Result<User, RepositoryError>;

    /// List a user's movies.
    ///
    /// Returns an empty collection when the user is absent or has no
    /// movies.
    async fn get_user_movies(&self, user_id: u32) -> Result<Vec<Movie>, RepositoryError>;

    /// Add a movie to a user's collection and persist the dataset.
    ///
    /// Returns the user's updated collection. Returns
    /// `Err(RepositoryError::NotFound)` when the user doesn't exist.
    async fn add_movie(&self, user_id: u32, movie: NewMovie)
    -> Result<Vec<Movie>, RepositoryError>;

    /// Merge `update` into an existing movie and persist the dataset.
    ///
    /// Fields present in `update` overwrite, absent fields are retained.
    /// Returns `Err(RepositoryError::NotFound)` unless both user and
    /// movie exist.
    async fn update_movie(
        &self,
        user_id: u32,
        movie_id: u32,
        update: MovieUpdate,
    ) -> Result<(), RepositoryError>;

    /// Delete a movie from a user's collection and persist the dataset.
    ///
    /// Returns `Err(RepositoryError::NotFound)` unless both user and
    /// movie exist; the dataset is untouched on failure.
    async fn delete_movie(&self, user_id: u32, movie_id: u32) -> Result<(), RepositoryError>;

    /// Find a movie by id across all users.
    ///
    /// Movie ids are only unique per user, so this returns the first
    /// match in user iteration order. User-scoped operations should be
    /// preferred wherever the owning user is known.
    async fn find_movie(&self, movie_id: u32) -> Result<Option<Movie>, RepositoryError>;

    /// Ids of all users holding a movie with the given id.
    async fn users_with_movie(&self, movie_id: u32) -> Result<Vec<u32>, RepositoryError>;

    /// Ids of all users whose name matches exactly.
    async fn find_users_by_name(&self, name: &str) -> Result<Vec<u32>, RepositoryError>;

    /// The `limit` highest-rated movies across all users.
    ///
    /// Sorted by rating descending with a stable sort, so ties keep
    /// their encounter order. Returns fewer than `limit` when the
    /// dataset is smaller.
    async fn top_rated_movies(&self, limit: usize) -> Result<Vec<Movie>, RepositoryError>;

    /// Number of movies per release year across all users.
    async fn movie_count_per_year(&self) -> Result<BTreeMap<i32, usize>, RepositoryError>;
}
