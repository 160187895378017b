//! Movie domain types.

use serde::{Deserialize, Serialize};

/// A movie in a user's collection.
///
/// Ids are assigned by the repository (max existing id + 1, or 1 for an
/// empty collection) and are unique within the owning user's collection
/// only; two users may both hold a movie with id 1. Use `NewMovie` for
/// movies that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Id of the movie, scoped to the owning user.
    pub id: u32,
    /// Title.
    pub name: String,
    /// Director.
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Rating on a 0-10 scale.
    pub rating: f64,
    /// Poster image URL, if one is known.
    ///
    /// `None` means "no poster known". A failed metadata lookup is reported
    /// through `MetadataLookupError` and lands here as `None`, never as an
    /// error message posing as a URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Movie {
    /// Apply a field-level merge to this movie.
    ///
    /// `Some` fields overwrite the stored value, `None` fields are retained.
    pub fn apply(&mut self, update: MovieUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(director) = update.director {
            self.director = director;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(poster) = update.poster {
            self.poster = Some(poster);
        }
    }
}

/// A movie to be added to a collection (no id yet).
///
/// The repository assigns the id on insert and returns the updated
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    /// Title.
    pub name: String,
    /// Director.
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Rating on a 0-10 scale.
    pub rating: f64,
    /// Poster URL when the caller already has one; otherwise filled in by
    /// the metadata lookup at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl NewMovie {
    /// Materialize this movie under its assigned id.
    #[must_use]
    pub fn into_movie(self, id: u32) -> Movie {
        Movie {
            id,
            name: self.name,
            director: self.director,
            year: self.year,
            rating: self.rating,
            poster: self.poster,
        }
    }
}

/// Field-level update for a stored movie.
///
/// Every field is optional; absent fields keep their stored value. The
/// poster can be replaced but not cleared through an update, matching the
/// "retained unless explicitly replaced" rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieUpdate {
    /// New title, if any.
    pub name: Option<String>,
    /// New director, if any.
    pub director: Option<String>,
    /// New release year, if any.
    pub year: Option<i32>,
    /// New rating, if any.
    pub rating: Option<f64>,
    /// New poster URL, if any.
    pub poster: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 1,
            name: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
            year: 1979,
            rating: 8.5,
            poster: Some("https://posters.example/alien.jpg".to_string()),
        }
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut movie = sample_movie();
        movie.apply(MovieUpdate {
            rating: Some(9.0),
            ..MovieUpdate::default()
        });

        assert_eq!(movie.rating, 9.0);
        assert_eq!(movie.name, "Alien");
        assert_eq!(movie.director, "Ridley Scott");
        assert_eq!(movie.year, 1979);
        assert_eq!(
            movie.poster.as_deref(),
            Some("https://posters.example/alien.jpg")
        );
    }

    #[test]
    fn test_apply_with_empty_update_is_a_no_op() {
        let mut movie = sample_movie();
        let before = movie.clone();
        movie.apply(MovieUpdate::default());
        assert_eq!(movie, before);
    }

    #[test]
    fn test_apply_cannot_clear_poster() {
        let mut movie = sample_movie();
        movie.apply(MovieUpdate {
            name: Some("Aliens".to_string()),
            ..MovieUpdate::default()
        });
        assert!(movie.poster.is_some());
    }

    #[test]
    fn test_into_movie_assigns_id() {
        let new = NewMovie {
            name: "Heat".to_string(),
            director: "Michael Mann".to_string(),
            year: 1995,
            rating: 8.3,
            poster: None,
        };
        let movie = new.into_movie(7);
        assert_eq!(movie.id, 7);
        assert_eq!(movie.name, "Heat");
        assert!(movie.poster.is_none());
    }

    #[test]
    fn test_missing_poster_is_omitted_from_json() {
        let movie = Movie {
            poster: None,
            ..sample_movie()
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("poster").is_none());

        // And an absent key deserializes back to None
        let parsed: Movie = serde_json::from_value(json).unwrap();
        assert!(parsed.poster.is_none());
    }
}
