//! Error types for input loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Table Errors ===
    /// Delimited text could not be parsed.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// File has no header row.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },
}

impl IngestError {
    pub(crate) fn csv(path: &Path, error: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    pub(crate) fn io(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
