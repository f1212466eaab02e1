//! Error types for xresourcedb

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing, querying, or loading resource
/// databases.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A single entry or query string did not conform to the resource
    /// grammar (spec.md §4.1).
    #[error("invalid resource entry")]
    ParseFailure,

    /// A query matched no entry in the database.
    #[error("resource not found")]
    NotFound,

    /// A value was present but could not be converted to the requested
    /// scalar type.
    #[error("value is not a valid {expected}: {value:?}")]
    InvalidConversion { expected: &'static str, value: String },

    #[error("failed to read resource file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("included file not found: {path} (included from {source_file})")]
    IncludeNotFound { path: PathBuf, source_file: PathBuf },

    #[error("circular #include detected: {path} (chain: {chain})")]
    CircularInclude { path: PathBuf, chain: String },
}
