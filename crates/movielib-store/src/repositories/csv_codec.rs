//! Delimited-text codec: one row per (user, movie) pair.
//!
//! The table is a denormalized join with the user columns repeated on
//! every row, header
//! `user_id,name,movie_id,movie_name,director,year,rating,poster`.
//! A user with no movies is persisted as a single membership row whose
//! movie columns are all empty, so the user survives the next rewrite.
//! Rows belonging to one user do not have to be adjacent; decoding
//! groups them by `user_id`.

use movielib_core::domain::{Movie, User};
use serde::{Deserialize, Serialize};

use super::flat_file::{CodecError, DocumentCodec, FlatFileLibrary};

/// Store over the delimited-text format.
pub type CsvLibraryStore = FlatFileLibrary<CsvCodec>;

impl CsvLibraryStore {
    /// Create a delimited-text store over the given file path.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(path, CsvCodec)
    }
}

/// One row of the table.
///
/// Movie columns are optional as a unit: a row either carries a movie
/// (movie_id present) or is a bare user membership row.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    user_id: u32,
    name: String,
    movie_id: Option<u32>,
    movie_name: Option<String>,
    director: Option<String>,
    year: Option<i32>,
    rating: Option<f64>,
    poster: Option<String>,
}

impl Row {
    fn membership(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            movie_id: None,
            movie_name: None,
            director: None,
            year: None,
            rating: None,
            poster: None,
        }
    }

    fn movie(user: &User, movie: &Movie) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            movie_id: Some(movie.id),
            movie_name: Some(movie.name.clone()),
            director: Some(movie.director.clone()),
            year: Some(movie.year),
            rating: Some(movie.rating),
            poster: movie.poster.clone(),
        }
    }
}

/// Codec for the delimited-text table format.
pub struct CsvCodec;

impl DocumentCodec for CsvCodec {
    fn decode(&self, document: &str) -> Result<Vec<User>, CodecError> {
        let mut users: Vec<User> = Vec::new();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(document.as_bytes());

        for (index, record) in reader.deserialize::<Row>().enumerate() {
            // Header is line 1, first record line 2
            let line = index + 2;
            let row = record.map_err(|e| CodecError::Parse(format!("line {line}: {e}")))?;

            let position = match users.iter().position(|u| u.id == row.user_id) {
                Some(position) => position,
                None => {
                    users.push(User {
                        id: row.user_id,
                        name: row.name.clone(),
                        movies: Vec::new(),
                    });
                    users.len() - 1
                }
            };

            let Some(movie_id) = row.movie_id else {
                // Membership row for a movie-less user
                continue;
            };
            let movie = Movie {
                id: movie_id,
                name: row.movie_name.ok_or_else(|| {
                    CodecError::Parse(format!("line {line}: movie row without a title"))
                })?,
                director: row.director.unwrap_or_default(),
                year: row.year.ok_or_else(|| {
                    CodecError::Parse(format!("line {line}: movie row without a year"))
                })?,
                rating: row.rating.ok_or_else(|| {
                    CodecError::Parse(format!("line {line}: movie row without a rating"))
                })?,
                poster: row.poster,
            };
            users[position].movies.push(movie);
        }

        Ok(users)
    }

    fn encode(&self, users: &[User]) -> Result<String, CodecError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for user in users {
            if user.movies.is_empty() {
                writer
                    .serialize(Row::membership(user))
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
            for movie in &user.movies {
                writer
                    .serialize(Row::movie(user, movie))
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CodecError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, name: &str, year: i32, rating: f64, poster: Option<&str>) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            director: "dir".to_string(),
            year,
            rating,
            poster: poster.map(str::to_string),
        }
    }

    fn sample_dataset() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                movies: vec![
                    movie(1, "Heat", 1995, 8.3, Some("https://posters.example/heat.jpg")),
                    movie(2, "Ran", 1985, 8.2, None),
                ],
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                movies: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_zero_movie_user() {
        let dataset = sample_dataset();
        let document = CsvCodec.encode(&dataset).unwrap();
        let decoded = CsvCodec.decode(&document).unwrap();
        assert_eq!(decoded, dataset);
    }

    #[test]
    fn test_header_row() {
        let document = CsvCodec.encode(&sample_dataset()).unwrap();
        let header = document.lines().next().unwrap();
        assert_eq!(
            header,
            "user_id,name,movie_id,movie_name,director,year,rating,poster"
        );
    }

    #[test]
    fn test_zero_movie_user_writes_membership_row() {
        let document = CsvCodec.encode(&sample_dataset()).unwrap();
        let bob_row = document
            .lines()
            .find(|l| l.starts_with("2,Bob"))
            .expect("membership row for Bob");
        assert_eq!(bob_row, "2,Bob,,,,,,");
    }

    #[test]
    fn test_decode_groups_non_adjacent_rows_by_user() {
        let document = "\
user_id,name,movie_id,movie_name,director,year,rating,poster
1,Alice,1,Heat,Michael Mann,1995,8.3,
2,Bob,1,Alien,Ridley Scott,1979,8.5,
1,Alice,2,Ran,Akira Kurosawa,1985,8.2,
";
        let users = CsvCodec.decode(document).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].movies.len(), 2);
        assert_eq!(users[0].movies[1].name, "Ran");
        assert_eq!(users[1].movies.len(), 1);
    }

    #[test]
    fn test_empty_poster_column_decodes_to_none() {
        let document = "\
user_id,name,movie_id,movie_name,director,year,rating,poster
1,Alice,1,Heat,Michael Mann,1995,8.3,
";
        let users = CsvCodec.decode(document).unwrap();
        assert!(users[0].movies[0].poster.is_none());
    }

    #[test]
    fn test_malformed_year_is_a_parse_error_with_line() {
        let document = "\
user_id,name,movie_id,movie_name,director,year,rating,poster
1,Alice,1,Heat,Michael Mann,not-a-year,8.3,
";
        let err = CsvCodec.decode(document).unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_movie_row_without_rating_is_a_parse_error() {
        let document = "\
user_id,name,movie_id,movie_name,director,year,rating,poster
1,Alice,1,Heat,Michael Mann,1995,,
";
        let err = CsvCodec.decode(document).unwrap_err();
        assert!(err.to_string().contains("without a rating"));
    }

    #[test]
    fn test_titles_with_commas_round_trip() {
        let dataset = vec![User {
            id: 1,
            name: "Alice".to_string(),
            movies: vec![movie(1, "The Good, the Bad and the Ugly", 1966, 8.8, None)],
        }];
        let document = CsvCodec.encode(&dataset).unwrap();
        assert_eq!(CsvCodec.decode(&document).unwrap(), dataset);
    }
}
