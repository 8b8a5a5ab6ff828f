//! Error types for workout sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workout sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("Not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV decoder rejected a record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The sheet has no header row, so there is no exercise column.
    #[error("missing exercise column in {path}: sheet has no header row")]
    MissingExerciseColumn { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
