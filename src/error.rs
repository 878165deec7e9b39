//! Error types for the benchmark pipeline
//!
//! Every error here is fatal: the benchmark is only meaningful on a
//! fully-loaded, fully-validated matrix, so no partial metrics are ever
//! emitted once loading begins, and nothing is retried.

use std::path::PathBuf;

/// Errors produced while configuring or loading a benchmark run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid run configuration (e.g. no matrix selected)
    #[error("configuration error: {0}")]
    Config(String),

    /// A matrix file could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matrix file violates the coordinate format contract:
    /// unparsable header, fewer data lines than declared, or indices
    /// outside the declared dimensions
    #[error("malformed matrix: {0}")]
    Format(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
