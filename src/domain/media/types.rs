// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::path::{Path, PathBuf};

/// Video container extensions accepted by the player (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v"];

/// Audio extensions accepted by the player (lowercase).
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "ogg", "oga", "opus", "m4a", "aac"];

/// Whether a source is rendered as audio or video.
///
/// This only changes the rendering target and the metadata source; speed,
/// duration and visibility logic are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Audio file (MP3, FLAC, WAV, etc.)
    Audio,
    /// Video file (MP4, MKV, WebM, etc.)
    Video,
}

impl MediaKind {
    /// Detects the media kind from a file extension, case-insensitively.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Audio)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Detects the media kind from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns true for audio sources.
    #[must_use]
    pub fn is_audio(self) -> bool {
        matches!(self, Self::Audio)
    }
}

/// Returns true if the path has a supported audio or video extension.
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    MediaKind::from_path(path).is_some()
}

/// A playable local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    path: PathBuf,
    kind: MediaKind,
}

impl MediaSource {
    /// Creates a source if the path has a supported extension.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = MediaKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// File name without its final extension, if the path has one.
    #[must_use]
    pub fn file_stem(&self) -> Option<String> {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
    }

    /// File name including the extension, for playlist rows.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
