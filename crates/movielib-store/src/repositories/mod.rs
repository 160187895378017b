//! Store implementations of the `LibraryRepository` port.

pub mod csv_codec;
pub mod flat_file;
pub mod json_codec;

pub use csv_codec::{CsvCodec, CsvLibraryStore};
pub use flat_file::{CodecError, DocumentCodec, FlatFileLibrary};
pub use json_codec::{JsonCodec, JsonLibraryStore};
