// SPDX-License-Identifier: MPL-2.0
//! Metadata reading port definition.
//!
//! Audio sources carry tags (title, artist, album, year, cover art). The
//! presentation layer shows them; the player logic never depends on them.
//! Infrastructure adapters implement [`MetadataReader`] with a tag library.

use crate::domain::media::MediaTags;
use std::fmt;
use std::path::Path;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while reading tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The file could not be parsed as a tagged media file.
    Unreadable(String),

    /// The file parsed but carries neither tags nor a duration.
    NoTags,

    /// The file could not be accessed.
    Io(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Unreadable(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::NoTags => write!(f, "File has no metadata tags"),
            MetadataError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::Io(err.to_string())
    }
}

// =============================================================================
// MetadataReader
// =============================================================================

/// Trait for reading tags from audio files.
///
/// Implementations run on a blocking worker, so they must be shareable.
pub trait MetadataReader: Send + Sync {
    /// Reads all tags from the file at `path`, plus the duration stored in
    /// its headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or carries nothing usable.
    fn read(&self, path: &Path) -> Result<MediaTags, MetadataError>;
}
