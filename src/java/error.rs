//! Error types for source analysis

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the analysis functions.
///
/// Every variant is raised at the point where the malformed input is
/// detected; nothing in the crate retries or recovers locally.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Required text was empty or blank
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("No package found in the given class content")]
    NoPackageFound,

    /// Neither a unique public nor a unique non-public declaration exists
    #[error("No unique declaration found in source code")]
    NoUniqueDeclaration,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;
