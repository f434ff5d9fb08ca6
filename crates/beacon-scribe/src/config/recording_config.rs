use crate::{AppError, AppResult, config::DEFAULT_RECORDING_DIR_NAME};

use std::{panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Recording storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Directory recordings are written to. Defaults to the platform data
    /// dir when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl RecordingConfig {
    /// The effective recording directory.
    #[track_caller]
    pub fn resolve_directory(&self) -> AppResult<PathBuf> {
        if let Some(directory) = &self.directory {
            return Ok(directory.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "beacon-scribe", "Beacon-Scribe").ok_or_else(
            || AppError::ConfigError {
                reason: "Failed to get data directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(proj_dirs.data_dir().join(DEFAULT_RECORDING_DIR_NAME))
    }
}
