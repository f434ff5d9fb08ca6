//! Export bundling: collect the recording files into a single archive.
//!
//! Runs independently of the session state machine; failures here are a
//! transient notice and never touch session state.

use crate::{CoreError, CoreResult};

use std::{
    fs::{self, File},
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use flate2::{Compression, write::GzEncoder};
use tracing::{debug, info, instrument};

/// File name of the produced archive inside the recording directory.
pub const ARCHIVE_FILE_NAME: &str = "measurements.tar.gz";

/// Bundle every `.json` recording in `recording_dir` into one
/// `measurements.tar.gz`, replacing any previous archive.
///
/// Returns the path of the produced archive.
#[track_caller]
#[instrument]
pub fn bundle_recordings(recording_dir: &Path) -> CoreResult<PathBuf> {
    let files = json_files_in(recording_dir)?;
    if files.is_empty() {
        return Err(CoreError::NoRecordingsFound {
            dir: recording_dir.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let archive_path = recording_dir.join(ARCHIVE_FILE_NAME);
    if archive_path.exists() {
        debug!(archive = ?archive_path, "Removing previous archive");
        fs::remove_file(&archive_path)?;
    }

    let encoder = GzEncoder::new(File::create(&archive_path)?, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for file in &files {
        // Entries are stored flat, by file name.
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        builder.append_path_with_name(file, name)?;
    }

    builder.into_inner()?.finish()?.sync_all()?;

    info!(archive = ?archive_path, file_count = files.len(), "Recordings bundled");

    Ok(archive_path)
}

/// The `.json` recording files in `dir`, sorted by name for a deterministic
/// archive layout.
pub fn json_files_in(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}
