//! Library service - thin orchestrator for catalog operations.
//!
//! This service provides a clean interface over the repository and
//! metadata lookup ports. Its one piece of business logic is poster
//! enrichment at movie-creation time; everything else delegates to the
//! `LibraryRepository` port.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{Movie, MovieUpdate, NewMovie, User};
use crate::ports::{LibraryRepository, MetadataLookup, RepositoryError};

/// Service for managing the movie library.
///
/// Holds the repository selected at startup and the metadata lookup
/// client behind their port traits. There is intentionally no
/// delete-user operation: users are never removed in this design.
pub struct LibraryService {
    repo: Arc<dyn LibraryRepository>,
    metadata: Arc<dyn MetadataLookup>,
}

impl LibraryService {
    /// Create a new library service.
    pub fn new(repo: Arc<dyn LibraryRepository>, metadata: Arc<dyn MetadataLookup>) -> Self {
        Self { repo, metadata }
    }

    /// List all users with their movie collections.
    pub async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        self.repo.list_users().await
    }

    /// Get a user by id, `None` when absent.
    pub async fn get_user(&self, user_id: u32) -> Result<Option<User>, RepositoryError> {
        self.repo.get_user(user_id).await
    }

    /// Add a user and return the persisted record with its fresh id.
    pub async fn add_user(&self, name: &str) -> Result<User, RepositoryError> {
        self.repo.add_user(name).await
    }

    /// List a user's movies (empty when the user is absent).
    pub async fn get_user_movies(&self, user_id: u32) -> Result<Vec<Movie>, RepositoryError> {
        self.repo.get_user_movies(user_id).await
    }

    /// Add a movie to a user's collection, enriching it with a poster
    /// when the caller supplied none.
    ///
    /// A failed lookup is classified, logged and falls back to storing
    /// the movie without a poster; it never fails the add, and the error
    /// is never written into the poster field.
    pub async fn add_movie(
        &self,
        user_id: u32,
        mut movie: NewMovie,
    ) -> Result<Vec<Movie>, RepositoryError> {
        if movie.poster.is_none() {
            match self.metadata.lookup_title(&movie.name).await {
                Ok(meta) => movie.poster = meta.poster,
                Err(err) => {
                    tracing::warn!(
                        title = %movie.name,
                        error = %err,
                        "metadata lookup failed, storing movie without poster"
                    );
                }
            }
        }
        self.repo.add_movie(user_id, movie).await
    }

    /// Merge an update into an existing movie.
    pub async fn update_movie(
        &self,
        user_id: u32,
        movie_id: u32,
        update: MovieUpdate,
    ) -> Result<(), RepositoryError> {
        self.repo.update_movie(user_id, movie_id, update).await
    }

    /// Delete a movie from a user's collection.
    pub async fn delete_movie(&self, user_id: u32, movie_id: u32) -> Result<(), RepositoryError> {
        self.repo.delete_movie(user_id, movie_id).await
    }

    /// First movie with the given id across all users, `None` when no
    /// user holds one.
    pub async fn find_movie(&self, movie_id: u32) -> Result<Option<Movie>, RepositoryError> {
        self.repo.find_movie(movie_id).await
    }

    /// Ids of users holding a movie with the given id.
    pub async fn users_with_movie(&self, movie_id: u32) -> Result<Vec<u32>, RepositoryError> {
        self.repo.users_with_movie(movie_id).await
    }

    /// Ids of users whose name matches exactly.
    pub async fn find_users_by_name(&self, name: &str) -> Result<Vec<u32>, RepositoryError> {
        self.repo.find_users_by_name(name).await
    }

    /// The highest-rated movies across all users, rating descending.
    pub async fn top_rated_movies(&self, limit: usize) -> Result<Vec<Movie>, RepositoryError> {
        self.repo.top_rated_movies(limit).await
    }

    /// Movie count per release year across all users.
    pub async fn movie_count_per_year(&self) -> Result<BTreeMap<i32, usize>, RepositoryError> {
        self.repo.movie_count_per_year().await
    }
}
