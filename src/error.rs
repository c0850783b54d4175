//! Defines the application's error types and a convenience `Result` alias.
//!
//! `LoadError` covers everything that can go wrong while reading a catalog file,
//! `AppError` is the top-level error surfaced to the shell. Errors that do not
//! implement `Clone` are wrapped in `Arc` so both enums stay cloneable.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failure while loading a catalog file.
///
/// Line numbers are 1-based. Every record-level variant carries the raw line
/// exactly as it appeared in the file.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// The catalog file does not exist.
    #[error("File does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The catalog file exists but could not be opened or read.
    #[error("Unable to read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    /// The line has fewer than two comma-separated fields.
    #[error("Invalid course entry on line {line_no}: {line}")]
    MalformedRecord { line_no: usize, line: String },

    /// The first field is not a valid course number.
    #[error("Invalid course number on line {line_no}: {line}")]
    InvalidCourseNumber { line_no: usize, line: String },

    /// The second field is not a valid course name.
    #[error("Invalid course name on line {line_no}: {line}")]
    InvalidCourseName { line_no: usize, line: String },

    /// One of the trailing fields is not a valid course number.
    #[error("Invalid prerequisite course number '{prerequisite}' on line {line_no}: {line}")]
    InvalidPrerequisite {
        line_no: usize,
        line: String,
        prerequisite: String,
    },
}

impl LoadError {
    /// Builds the appropriate file-level error for an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound { path }
        } else {
            LoadError::FileUnreadable {
                path,
                source: Arc::new(err),
            }
        }
    }
}

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error while loading the course catalog.
    #[error("Load Error: {0}")]
    Load(#[from] LoadError),

    /// Error related to standard I/O operations (writing reports, terminal output).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error during JSON rendering (`serde_json`).
    #[error("JSON Serialization Error: {0}")]
    JsonSerialize(Arc<serde_json::Error>),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error related to progress spinner style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---
// Arc is used for non-Clone error types.

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for AppError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        AppError::Template(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonSerialize(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_file_maps_to_file_not_found() {
        let err = LoadError::from_io("nope.txt", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_other_io_errors_map_to_file_unreadable() {
        let err = LoadError::from_io(
            "locked.txt",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoadError::FileUnreadable { .. }));
    }

    #[test]
    fn test_record_errors_include_offending_line() {
        let err = LoadError::InvalidCourseName {
            line_no: 4,
            line: "CSCI101,   ".to_string(),
        };
        let msg = AppError::from(err).to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("CSCI101,   "));
    }
}
