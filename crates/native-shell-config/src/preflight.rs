// crates/native-shell-config/src/preflight.rs
// ============================================================================
// Module: Web Asset Preflight
// Description: Package-time checks for the configured web asset directory.
// Purpose: Fail before packaging when the web bundle is missing or incomplete.
// Dependencies: std, thiserror
// ============================================================================

//! ## Overview
//! Config loading does not touch the web asset directory because the bundle
//! is usually built after the config is written. The preflight runs at
//! package time: the directory must exist, be a directory, and contain the
//! `index.html` entry file. The bundle walk does not follow symlinks and is
//! capped at [`MAX_BUNDLE_ENTRIES`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ShellConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Entry file the shell loads from the web asset directory.
pub const WEB_ENTRY_FILE: &str = "index.html";
/// Maximum number of directory entries visited while sizing the bundle.
pub const MAX_BUNDLE_ENTRIES: usize = 100_000;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result of a successful web asset preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightReport {
    /// Web asset directory resolved against the project root.
    pub web_dir: PathBuf,
    /// Path of the entry file inside the web asset directory.
    pub entry_file: PathBuf,
    /// Number of regular files in the bundle.
    pub file_count: usize,
}

/// Preflight failures.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// I/O failure while inspecting the bundle.
    #[error("preflight io error: {0}")]
    Io(String),
    /// The web asset directory does not exist.
    #[error("web asset directory not found: {0}")]
    MissingWebDir(PathBuf),
    /// The web asset path exists but is not a directory.
    #[error("web asset path is not a directory: {0}")]
    NotADirectory(PathBuf),
    /// The entry file is missing from the web asset directory.
    #[error("web asset directory has no {WEB_ENTRY_FILE}: {0}")]
    MissingEntry(PathBuf),
    /// The bundle has more entries than the walk allows.
    #[error("web asset directory exceeds {MAX_BUNDLE_ENTRIES} entries: {0}")]
    TooManyEntries(PathBuf),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Checks that the configured web asset directory is ready to package.
///
/// # Errors
///
/// Returns [`PreflightError`] when the directory or its entry file is missing.
pub fn preflight_web_assets(
    config: &ShellConfig,
    project_root: &Path,
) -> Result<PreflightReport, PreflightError> {
    let web_dir = config.web_dir_path(project_root);
    let metadata = match fs::metadata(&web_dir) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(PreflightError::MissingWebDir(web_dir));
        }
        Err(err) => return Err(PreflightError::Io(format!("{}: {err}", web_dir.display()))),
    };
    if !metadata.is_dir() {
        return Err(PreflightError::NotADirectory(web_dir));
    }
    let entry_file = web_dir.join(WEB_ENTRY_FILE);
    if !entry_file.is_file() {
        return Err(PreflightError::MissingEntry(web_dir));
    }
    let file_count = count_bundle_files(&web_dir, MAX_BUNDLE_ENTRIES)?;
    Ok(PreflightReport {
        web_dir,
        entry_file,
        file_count,
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Counts regular files below `root` without following symlinks, visiting at
/// most `max_entries` directory entries.
fn count_bundle_files(root: &Path, max_entries: usize) -> Result<usize, PreflightError> {
    let mut pending = vec![root.to_path_buf()];
    let mut visited = 0_usize;
    let mut files = 0_usize;
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .map_err(|err| PreflightError::Io(format!("{}: {err}", dir.display())))?;
        for entry in entries {
            let entry =
                entry.map_err(|err| PreflightError::Io(format!("{}: {err}", dir.display())))?;
            visited += 1;
            if visited > max_entries {
                return Err(PreflightError::TooManyEntries(root.to_path_buf()));
            }
            let file_type = entry
                .file_type()
                .map_err(|err| PreflightError::Io(format!("{}: {err}", dir.display())))?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files += 1;
            }
        }
    }
    Ok(files)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
