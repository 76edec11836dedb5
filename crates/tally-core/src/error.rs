//! Error types for tally

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The backing document exists but is not valid JSON in the expected
    /// shape. Fatal to the operation; nothing is mutated.
    #[error("Corrupt document {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// IO failure while reading a backing document. A missing file is not
    /// an error; the stores recover it as an empty collection before this
    /// variant is ever constructed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while persisting a document. The prior on-disk state is
    /// intact; writes go through a temp file and atomic rename.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Update/delete referencing a position outside the collection.
    /// The operation is rejected with no state change.
    #[error("Record index {index} out of range ({len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Record construction with a date that does not parse as YYYY-MM-DD.
    /// The invalid record never reaches a collection.
    #[error("Invalid date {value:?} (expected YYYY-MM-DD): {source}")]
    DateFormat {
        value: String,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
