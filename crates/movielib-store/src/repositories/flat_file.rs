//! Generic flat-file store over a document codec.
//!
//! The store implements the full `LibraryRepository` contract once; the
//! two storage formats plug in as codecs that translate between the
//! nested user/movie model and a single text document. Every operation
//! materializes the whole dataset, and every mutation rewrites the whole
//! document.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use movielib_core::domain::{Movie, MovieUpdate, NewMovie, User};
use movielib_core::ports::{LibraryRepository, RepositoryError};

/// Errors produced by a document codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document could not be parsed into the dataset.
    #[error("parse error: {0}")]
    Parse(String),

    /// The dataset could not be rendered into a document.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Translation between the nested dataset and one text document.
///
/// Codecs hold no state and no I/O; the store owns the file. A codec
/// must round-trip every dataset it encodes, including users with empty
/// movie collections.
pub trait DocumentCodec: Send + Sync {
    /// Parse a stored document into the dataset.
    fn decode(&self, document: &str) -> Result<Vec<User>, CodecError>;

    /// Render the dataset into a document ready to be written.
    fn encode(&self, users: &[User]) -> Result<String, CodecError>;
}

/// Flat-file implementation of the `LibraryRepository` port.
///
/// Reads the entire file per operation; mutations hold a store-wide lock
/// across their read-modify-write cycle so overlapping in-process
/// mutations serialize instead of losing updates. Writers in other
/// processes are not coordinated with; the last full-document write wins
/// there, which is an accepted limitation of the single-process
/// deployment this targets.
pub struct FlatFileLibrary<C: DocumentCodec> {
    path: PathBuf,
    codec: C,
    write_lock: Mutex<()>,
}

impl<C: DocumentCodec> FlatFileLibrary<C> {
    /// Create a store over the given file path.
    ///
    /// The file does not have to exist yet; a missing file reads as the
    /// empty dataset and is created on the first mutation.
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read and decode the whole dataset.
    async fn load(&self) -> Result<Vec<User>, RepositoryError> {
        let document = match tokio::fs::read_to_string(&self.path).await {
            Ok(document) => document,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file missing, reading empty dataset");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "reading {}: {e}",
                    self.path.display()
                )));
            }
        };

        // A created-but-empty file is an empty dataset, not a parse fault
        if document.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.codec.decode(&document).map_err(|e| match e {
            CodecError::Parse(msg) => {
                RepositoryError::Malformed(format!("{}: {msg}", self.path.display()))
            }
            CodecError::Encode(msg) => RepositoryError::Serialization(msg),
        })
    }

    /// Encode and rewrite the whole dataset.
    ///
    /// Writes to a sibling temp file and renames it over the target, so
    /// the visible file is always either the old or the new document.
    async fn store(&self, users: &[User]) -> Result<(), RepositoryError> {
        let document = self.codec.encode(users).map_err(|e| match e {
            CodecError::Parse(msg) => RepositoryError::Malformed(msg),
            CodecError::Encode(msg) => RepositoryError::Serialization(msg),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    RepositoryError::Storage(format!("creating {}: {e}", parent.display()))
                })?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, document).await.map_err(|e| {
            RepositoryError::Storage(format!("writing {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            RepositoryError::Storage(format!("replacing {}: {e}", self.path.display()))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            users = users.len(),
            "rewrote dataset"
        );
        Ok(())
    }
}

fn user_not_found(user_id: u32) -> RepositoryError {
    RepositoryError::NotFound(format!("user {user_id}"))
}

fn movie_not_found(user_id: u32, movie_id: u32) -> RepositoryError {
    RepositoryError::NotFound(format!("movie {movie_id} for user {user_id}"))
}

#[async_trait]
impl<C: DocumentCodec> LibraryRepository for FlatFileLibrary<C> {
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        self.load().await
    }

    async fn get_user(&self, user_id: u32) -> Result<Option<User>, RepositoryError> {
        let users = self.load().await?;
        Ok(users.into_iter().find(|u| u.id == user_id))
    }

    async fn add_user(&self, name: &str) -> Result<User, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            name: name.to_string(),
            movies: Vec::new(),
        };
        users.push(user.clone());

        self.store(&users).await?;
        Ok(user)
    }

    async fn get_user_movies(&self, user_id: u32) -> Result<Vec<Movie>, RepositoryError> {
        let users = self.load().await?;
        Ok(users
            .into_iter()
            .find(|u| u.id == user_id)
            .map(|u| u.movies)
            .unwrap_or_default())
    }

    async fn add_movie(
        &self,
        user_id: u32,
        movie: NewMovie,
    ) -> Result<Vec<Movie>, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| user_not_found(user_id))?;
        let movie = movie.into_movie(user.next_movie_id());
        user.movies.push(movie);
        let movies = user.movies.clone();

        self.store(&users).await?;
        Ok(movies)
    }

    async fn update_movie(
        &self,
        user_id: u32,
        movie_id: u32,
        update: MovieUpdate,
    ) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| user_not_found(user_id))?;
        let movie = user
            .movie_mut(movie_id)
            .ok_or_else(|| movie_not_found(user_id, movie_id))?;
        movie.apply(update);

        self.store(&users).await
    }

    async fn delete_movie(&self, user_id: u32, movie_id: u32) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| user_not_found(user_id))?;
        let before = user.movies.len();
        user.movies.retain(|m| m.id != movie_id);
        if user.movies.len() == before {
            return Err(movie_not_found(user_id, movie_id));
        }

        self.store(&users).await
    }

    async fn find_movie(&self, movie_id: u32) -> Result<Option<Movie>, RepositoryError> {
        let users = self.load().await?;
        Ok(users
            .into_iter()
            .find_map(|u| u.movies.into_iter().find(|m| m.id == movie_id)))
    }

    async fn users_with_movie(&self, movie_id: u32) -> Result<Vec<u32>, RepositoryError> {
        let users = self.load().await?;
        Ok(users
            .iter()
            .filter(|u| u.movie(movie_id).is_some())
            .map(|u| u.id)
            .collect())
    }

    async fn find_users_by_name(&self, name: &str) -> Result<Vec<u32>, RepositoryError> {
        let users = self.load().await?;
        Ok(users
            .iter()
            .filter(|u| u.name == name)
            .map(|u| u.id)
            .collect())
    }

    async fn top_rated_movies(&self, limit: usize) -> Result<Vec<Movie>, RepositoryError> {
        let users = self.load().await?;
        let mut movies: Vec<Movie> = users.into_iter().flat_map(|u| u.movies).collect();
        // Stable sort keeps encounter order among equal ratings
        movies.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        movies.truncate(limit);
        Ok(movies)
    }

    async fn movie_count_per_year(&self) -> Result<BTreeMap<i32, usize>, RepositoryError> {
        let users = self.load().await?;
        let mut counts = BTreeMap::new();
        for user in &users {
            for movie in &user.movies {
                *counts.entry(movie.year).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::json_codec::JsonCodec;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FlatFileLibrary<JsonCodec> {
        FlatFileLibrary::new(dir.path().join("library.json"), JsonCodec)
    }

    fn movie(name: &str, year: i32, rating: f64) -> NewMovie {
        NewMovie {
            name: name.to_string(),
            director: "someone".to_string(),
            year,
            rating,
            poster: None,
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_user_assigns_one_for_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_user_assigns_max_plus_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        // Seed a dataset with an id gap
        std::fs::write(
            &path,
            r#"[{"id": 2, "name": "Bob", "movies": []}, {"id": 7, "name": "Eve", "movies": []}]"#,
        )
        .unwrap();

        let store = FlatFileLibrary::new(path, JsonCodec);
        let user = store.add_user("Alice").await.unwrap();
        assert_eq!(user.id, 8);
        assert_eq!(store.list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_add_movie_assigns_ids_scoped_per_user() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = store.add_user("Alice").await.unwrap();
        let bob = store.add_user("Bob").await.unwrap();

        store.add_movie(alice.id, movie("Heat", 1995, 8.3)).await.unwrap();
        store.add_movie(alice.id, movie("Ran", 1985, 8.2)).await.unwrap();
        let bobs = store.add_movie(bob.id, movie("Alien", 1979, 8.5)).await.unwrap();

        // Bob's first movie gets id 1 even though Alice is already at 2
        assert_eq!(bobs[0].id, 1);
        let alices = store.get_user_movies(alice.id).await.unwrap();
        assert_eq!(alices.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_add_movie_to_missing_user_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let result = store.add_movie(42, movie("Heat", 1995, 8.3)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_movie_leaves_dataset_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        store.add_movie(user.id, movie("Heat", 1995, 8.3)).await.unwrap();

        let before = store.list_users().await.unwrap();
        let result = store.delete_movie(user.id, 99).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert_eq!(store.list_users().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_movie_removes_it() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        store.add_movie(user.id, movie("Heat", 1995, 8.3)).await.unwrap();
        store.add_movie(user.id, movie("Ran", 1985, 8.2)).await.unwrap();

        store.delete_movie(user.id, 1).await.unwrap();
        let movies = store.get_user_movies(user.id).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].name, "Ran");
    }

    #[tokio::test]
    async fn test_update_merges_only_supplied_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        store
            .add_movie(
                user.id,
                NewMovie {
                    poster: Some("https://posters.example/heat.jpg".to_string()),
                    ..movie("Heat", 1995, 8.3)
                },
            )
            .await
            .unwrap();

        store
            .update_movie(
                user.id,
                1,
                MovieUpdate {
                    rating: Some(9.1),
                    ..MovieUpdate::default()
                },
            )
            .await
            .unwrap();

        let movies = store.get_user_movies(user.id).await.unwrap();
        assert_eq!(movies[0].rating, 9.1);
        assert_eq!(movies[0].name, "Heat");
        assert_eq!(movies[0].director, "someone");
        assert_eq!(movies[0].year, 1995);
        assert_eq!(
            movies[0].poster.as_deref(),
            Some("https://posters.example/heat.jpg")
        );
    }

    #[tokio::test]
    async fn test_update_missing_movie_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();

        let result = store
            .update_movie(user.id, 5, MovieUpdate::default())
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_top_rated_is_stable_and_descending() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        store.add_movie(user.id, movie("first-nine", 2000, 9.0)).await.unwrap();
        store.add_movie(user.id, movie("mid", 2001, 7.5)).await.unwrap();
        store.add_movie(user.id, movie("second-nine", 2002, 9.0)).await.unwrap();
        store.add_movie(user.id, movie("low", 2003, 3.0)).await.unwrap();

        let top = store.top_rated_movies(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "first-nine");
        assert_eq!(top[1].name, "second-nine");
    }

    #[tokio::test]
    async fn test_top_rated_with_large_limit_returns_all() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = store.add_user("Alice").await.unwrap();
        store.add_movie(user.id, movie("only", 2000, 5.0)).await.unwrap();

        assert_eq!(store.top_rated_movies(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_movie_count_per_year() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = store.add_user("Alice").await.unwrap();
        let bob = store.add_user("Bob").await.unwrap();
        store.add_movie(alice.id, movie("a", 1999, 5.0)).await.unwrap();
        store.add_movie(alice.id, movie("b", 2001, 5.0)).await.unwrap();
        store.add_movie(bob.id, movie("c", 1999, 5.0)).await.unwrap();

        let counts = store.movie_count_per_year().await.unwrap();
        assert_eq!(counts.get(&1999), Some(&2));
        assert_eq!(counts.get(&2001), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[tokio::test]
    async fn test_find_movie_returns_first_match_in_user_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = store.add_user("Alice").await.unwrap();
        let bob = store.add_user("Bob").await.unwrap();
        store.add_movie(alice.id, movie("alice-first", 2000, 5.0)).await.unwrap();
        store.add_movie(bob.id, movie("bob-first", 2001, 6.0)).await.unwrap();

        // Both users hold a movie with id 1; Alice comes first
        let found = store.find_movie(1).await.unwrap().unwrap();
        assert_eq!(found.name, "alice-first");

        assert!(store.find_movie(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_users_with_movie_and_name_search() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = store.add_user("Alice").await.unwrap();
        let bob = store.add_user("Bob").await.unwrap();
        let alice2 = store.add_user("Alice").await.unwrap();
        store.add_movie(alice.id, movie("a", 2000, 5.0)).await.unwrap();
        store.add_movie(bob.id, movie("b", 2001, 6.0)).await.unwrap();

        assert_eq!(
            store.users_with_movie(1).await.unwrap(),
            vec![alice.id, bob.id]
        );
        assert_eq!(
            store.find_users_by_name("Alice").await.unwrap(),
            vec![alice.id, alice2.id]
        );
        assert!(store.find_users_by_name("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_distinct_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{ this is not a dataset").unwrap();

        let store = FlatFileLibrary::new(path, JsonCodec);
        let result = store.list_users().await;
        assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "").unwrap();

        let store = FlatFileLibrary::new(path, JsonCodec);
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_overlapping_adds_both_persist() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));
        let user = store.add_user("Alice").await.unwrap();

        // The store-wide lock serializes the two read-modify-write cycles
        let (a, b) = tokio::join!(
            store.add_movie(user.id, movie("first", 2000, 5.0)),
            store.add_movie(user.id, movie("second", 2001, 6.0)),
        );
        a.unwrap();
        b.unwrap();

        let movies = store.get_user_movies(user.id).await.unwrap();
        assert_eq!(movies.len(), 2);
        let mut ids: Vec<u32> = movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }
}
