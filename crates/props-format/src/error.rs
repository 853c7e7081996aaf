//! Error types for props-format

use std::path::PathBuf;

/// Result type for props-format operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or parsing a properties file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid unicode escape on line {line}")]
    InvalidEscape { line: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
