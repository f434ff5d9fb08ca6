use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Session orchestration errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Failed to hand a request to the background recording worker.
    #[error("Worker dispatch failed: {reason} {location}")]
    DispatchFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No recording files were found to bundle for export.
    #[error("No recordings found in {dir:?} {location}")]
    NoRecordingsFound {
        /// Directory that was searched.
        dir: std::path::PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

// Manual From with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<std::io::Error> for CoreError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CoreError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using [`CoreError`].
pub type Result<T> = StdResult<T, CoreError>;
