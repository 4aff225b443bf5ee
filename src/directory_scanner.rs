// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding playable media files.
//!
//! This module scans a directory (non-recursively) for supported audio and
//! video formats and sorts them by file name.

use crate::domain::media::MediaSource;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Scans a directory for supported media files, sorted by file name.
///
/// Subdirectories are not entered. Returns an empty list if the directory
/// holds no supported media.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<MediaSource>> {
    let mut sources = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(source) = MediaSource::from_path(path) {
                sources.push(source);
            }
        }
    }

    sort_by_file_name(&mut sources);
    Ok(sources)
}

/// Result of resolving a set of user-supplied paths.
#[derive(Debug, Default)]
pub struct ResolvedPaths {
    /// Playable sources, in the order given (directories expanded in place).
    pub sources: Vec<MediaSource>,
    /// Paths that were skipped because they are unsupported or unreadable.
    pub skipped: Vec<PathBuf>,
}

/// Resolves files and directories into playable sources.
///
/// Files with unsupported extensions and unreadable directories are
/// collected in [`ResolvedPaths::skipped`] instead of failing the whole call.
#[must_use]
pub fn resolve_paths<I, P>(paths: I) -> ResolvedPaths
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut resolved = ResolvedPaths::default();

    for path in paths {
        let path = path.into();
        if path.is_dir() {
            match scan_directory(&path) {
                Ok(found) => resolved.sources.extend(found),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot scan directory");
                    resolved.skipped.push(path);
                }
            }
        } else if let Some(source) = MediaSource::from_path(path.clone()) {
            resolved.sources.push(source);
        } else {
            resolved.skipped.push(path);
        }
    }

    resolved
}

fn sort_by_file_name(sources: &mut [MediaSource]) {
    sources.sort_by(|a, b| {
        let a_name = a.path().file_name().map(|n| n.to_string_lossy().to_lowercase());
        let b_name = b.path().file_name().map(|n| n.to_string_lossy().to_lowercase());
        a_name.cmp(&b_name)
    });
}
