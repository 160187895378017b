//! Structured-text codec: the nested model as one JSON document.
//!
//! The document is a pretty-printed array of user records, each embedding
//! its `movies` array. Users and movies carry their ids as fields and are
//! addressed by linear search, which keeps movie-less users first-class
//! records with no special casing.

use movielib_core::domain::User;

use super::flat_file::{CodecError, DocumentCodec, FlatFileLibrary};

/// Store over the structured-text format.
pub type JsonLibraryStore = FlatFileLibrary<JsonCodec>;

impl JsonLibraryStore {
    /// Create a structured-text store over the given file path.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(path, JsonCodec)
    }
}

/// Codec for the nested JSON document format.
pub struct JsonCodec;

impl DocumentCodec for JsonCodec {
    fn decode(&self, document: &str) -> Result<Vec<User>, CodecError> {
        serde_json::from_str(document).map_err(|e| CodecError::Parse(e.to_string()))
    }

    fn encode(&self, users: &[User]) -> Result<String, CodecError> {
        serde_json::to_string_pretty(users).map_err(|e| CodecError::Encode(e.to_string()))
    }
}
