//! Data store error types
//!
//! Errors that abort loading a data file. Problems with individual records
//! are not errors at this level: they are logged and the record is skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading data files
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array of records
    #[error("Expected a JSON array of records in {}", .path.display())]
    NotAnArray { path: PathBuf },
}

impl StoreError {
    /// The file the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::Io { path, .. }
            | StoreError::Json { path, .. }
            | StoreError::NotAnArray { path } => path,
        }
    }

    /// Checks if the file was missing or unreadable
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }
}
