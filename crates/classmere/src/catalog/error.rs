//! Error types for the catalog decoder.

use thiserror::Error;

/// Errors that can occur while decoding catalog records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A course record lacks `subjectCode` or `courseNumber`, or carries one
    /// of them with the wrong JSON type
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// The input text was not valid JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// A course list was neither an array nor a single object
    #[error("Expected a JSON array of course records")]
    NotAList,

    /// Reading a catalog file or directory failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl CatalogError {
    /// Returns true if this error concerns a single record, which callers
    /// building a collection should skip rather than abort on.
    pub fn is_record_error(&self) -> bool {
        matches!(self, CatalogError::MissingRequiredField { .. })
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::InvalidJson {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io {
            message: err.to_string(),
        }
    }
}
