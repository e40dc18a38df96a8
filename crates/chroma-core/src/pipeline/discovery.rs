//! Input directory enumeration.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ListingError;

/// Enumerates candidate input files in a directory.
///
/// Every regular file is a candidate regardless of extension; the decode
/// stage decides what is actually an image and what gets counted as a
/// failure.
pub struct FileDiscovery;

impl FileDiscovery {
    /// List all regular files directly inside `dir`, sorted by path.
    ///
    /// Subdirectories are not descended into. Any enumeration failure,
    /// including an unreadable or missing root, is fatal — listing is a
    /// precondition of the whole batch, not a per-item operation.
    pub fn list(dir: &Path) -> Result<Vec<PathBuf>, ListingError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ListingError {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        // Sort by path for deterministic ordering
        files.sort();
        Ok(files)
    }
}
