//! Error types for reference-data loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading reference tables or the vocabulary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV content.
    #[error("failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// A record parsed but carries an unusable value.
    #[error("invalid record in {file}: {message}")]
    InvalidRecord { file: String, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(file: impl Into<String>, error: &csv::Error) -> Self {
        Self::CsvParse {
            file: file.into(),
            message: error.to_string(),
        }
    }
}

/// Result type for reference-data loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
