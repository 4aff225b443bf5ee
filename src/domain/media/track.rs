// SPDX-License-Identifier: MPL-2.0
//! Now-playing information.

use super::types::{MediaKind, MediaSource};
use std::time::Duration;

/// Title shown for an audio file with neither a title tag nor a file name.
pub const UNTITLED_AUDIO: &str = "Audio File";

/// Tags read from an audio file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<u32>,
    /// Encoded cover art (JPEG or PNG bytes).
    pub cover: Option<Vec<u8>>,
    /// Length read from the container headers.
    pub duration: Option<Duration>,
}

/// What the now-playing card shows for the current source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub cover: Option<Vec<u8>>,
    pub file_stem: Option<String>,
    pub kind: MediaKind,
}

impl TrackInfo {
    /// Builds the info from whatever tags could be read.
    ///
    /// Missing title falls back to the file stem, missing artist to the
    /// album artist. Blank strings count as missing.
    #[must_use]
    pub fn from_tags(source: &MediaSource, tags: MediaTags) -> Self {
        let mut info = Self::from_file_name(source);
        if let Some(title) = non_blank(tags.title) {
            info.title = title;
        }
        info.artist = non_blank(tags.artist).or_else(|| non_blank(tags.album_artist));
        info.album = non_blank(tags.album);
        info.year = tags.year;
        info.cover = tags.cover.filter(|bytes| !bytes.is_empty());
        info
    }

    /// Info derived from the file name alone.
    ///
    /// Used for video sources and when tag extraction fails.
    #[must_use]
    pub fn from_file_name(source: &MediaSource) -> Self {
        let file_stem = source.file_stem();
        let title = fallback_title(file_stem.as_deref(), source);
        Self {
            title,
            artist: None,
            album: None,
            year: None,
            cover: None,
            file_stem,
            kind: source.kind(),
        }
    }

    /// Secondary line under the title: "artist - album", either alone, or nothing.
    #[must_use]
    pub fn subtitle(&self) -> Option<String> {
        match (&self.artist, &self.album) {
            (Some(artist), Some(album)) => Some(format!("{artist} - {album}")),
            (Some(artist), None) => Some(artist.clone()),
            (None, Some(album)) => Some(album.clone()),
            (None, None) => None,
        }
    }
}

fn fallback_title(file_stem: Option<&str>, source: &MediaSource) -> String {
    match (file_stem, source.kind()) {
        (Some(stem), _) => stem.to_string(),
        (None, MediaKind::Audio) => UNTITLED_AUDIO.to_string(),
        (None, MediaKind::Video) => source.file_name(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
