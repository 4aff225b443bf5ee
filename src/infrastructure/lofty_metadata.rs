// SPDX-License-Identifier: MPL-2.0
//! Audio tag reading via `lofty`.

use crate::application::port::{MetadataError, MetadataReader};
use crate::domain::media::MediaTags;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::picture::PictureType;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagItem};
use std::path::Path;
use std::time::Duration;

/// [`MetadataReader`] backed by `lofty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyMetadataReader;

impl MetadataReader for LoftyMetadataReader {
    fn read(&self, path: &Path) -> Result<MediaTags, MetadataError> {
        let tagged_file = Probe::open(path)
            .and_then(|probe| probe.read())
            .map_err(map_lofty_error)?;
        let duration = known_duration(tagged_file.properties().duration());

        match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            Some(tag) => Ok(MediaTags {
                duration,
                ..tags_from(tag)
            }),
            None if duration.is_some() => Ok(MediaTags {
                duration,
                ..MediaTags::default()
            }),
            None => Err(MetadataError::NoTags),
        }
    }
}

fn tags_from(tag: &Tag) -> MediaTags {
    MediaTags {
        title: tag.title().map(|s| s.into_owned()),
        artist: tag.artist().map(|s| s.into_owned()),
        album_artist: item_text(tag, |item| matches!(item.key(), ItemKey::AlbumArtist))
            .map(str::to_string),
        album: tag.album().map(|s| s.into_owned()),
        year: item_text(tag, |item| {
            matches!(item.key(), ItemKey::RecordingDate | ItemKey::ReleaseDate)
        })
        .and_then(parse_year),
        cover: cover_art(tag),
        duration: None,
    }
}

fn item_text(tag: &Tag, wanted: impl Fn(&TagItem) -> bool) -> Option<&str> {
    tag.items()
        .filter(|item| wanted(item))
        .find_map(|item| item.value().text())
}

/// Leading four-digit year of a date such as `1999` or `1999-04-12`.
fn parse_year(text: &str) -> Option<u32> {
    let digits = text.trim().get(..4)?;
    digits.parse().ok()
}

/// Front cover if present, otherwise the first embedded picture.
fn cover_art(tag: &Tag) -> Option<Vec<u8>> {
    let pictures = tag.pictures();
    pictures
        .iter()
        .find(|picture| picture.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .map(|picture| picture.data().to_vec())
}

/// Reads the duration from the container headers without decoding.
///
/// Blocks on file I/O; call it from a worker.
#[must_use]
pub fn header_duration(path: &Path) -> Option<Duration> {
    let tagged_file = Probe::open(path).ok()?.read().ok()?;
    known_duration(tagged_file.properties().duration())
}

fn known_duration(duration: Duration) -> Option<Duration> {
    (!duration.is_zero()).then_some(duration)
}

fn map_lofty_error(err: LoftyError) -> MetadataError {
    match err.kind() {
        ErrorKind::Io(io) => MetadataError::Io(io.to_string()),
        _ => MetadataError::Unreadable(err.to_string()),
    }
}
