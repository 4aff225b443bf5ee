// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! A media surface is the black-box playback service the player drives:
//! it decodes and outputs a source, and reports lifecycle events back.
//! The player never decodes anything itself.

use crate::domain::media::MediaSource;
use std::fmt;

// =============================================================================
// PlaybackError
// =============================================================================

/// Errors reported by a media surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The surface cannot play this kind of source.
    UnsupportedFormat,

    /// No audio output device could be opened.
    OutputUnavailable(String),

    /// The source could not be decoded.
    DecodingFailed(String),

    /// Seeking to the requested position failed.
    SeekFailed(String),

    /// The file could not be accessed.
    Io(String),
}

impl PlaybackError {
    /// Returns the i18n key used to show this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "error-playback-unsupported",
            Self::OutputUnavailable(_) => "error-playback-output",
            Self::DecodingFailed(_) => "error-playback-decoding",
            Self::SeekFailed(_) => "error-playback-seek",
            Self::Io(_) => "error-playback-io",
        }
    }

    /// Categorizes a raw decoder or output message.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("unrecognized format")
            || msg_lower.contains("unsupported")
            || msg_lower.contains("no stream")
        {
            return Self::UnsupportedFormat;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
            || msg_lower.contains("io error")
        {
            return Self::Io(msg.to_string());
        }

        if msg_lower.contains("device") || msg_lower.contains("stream config") {
            return Self::OutputUnavailable(msg.to_string());
        }

        Self::DecodingFailed(msg.to_string())
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat => write!(f, "Unsupported media format"),
            Self::OutputUnavailable(msg) => write!(f, "Audio output unavailable: {msg}"),
            Self::DecodingFailed(msg) => write!(f, "Decoding failed: {msg}"),
            Self::SeekFailed(msg) => write!(f, "Seek failed: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl From<std::io::Error> for PlaybackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// =============================================================================
// SurfaceEvent
// =============================================================================

/// Lifecycle events emitted by a media surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused, including the implicit pause at the end.
    Pause,
    /// Reached the end of a non-looping source.
    Ended,
    /// Current position in seconds.
    TimeUpdate(f64),
    /// Total duration in seconds became known.
    LoadedMetadata(f64),
    /// Buffered range grew; `buffered_end` is in seconds.
    Progress { buffered_end: f64 },
}

// =============================================================================
// MediaSurface
// =============================================================================

/// Host playback service driven by the player.
///
/// Volume, rate and loop are plain property writes and cannot fail.
/// Events are pulled with [`MediaSurface::poll_events`] from the UI loop so
/// every state transition happens on one thread.
pub trait MediaSurface {
    /// Loads a new source, replacing the current one. Playback starts paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened or decoded.
    fn load(&mut self, source: &MediaSource) -> Result<(), PlaybackError>;

    /// Releases the current source.
    fn unload(&mut self);

    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is loaded or the output failed.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback.
    fn pause(&mut self);

    /// Seeks to an absolute position in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying decoder cannot seek.
    fn seek(&mut self, position_secs: f64) -> Result<(), PlaybackError>;

    /// Sets output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Sets the playback rate multiplier.
    fn set_playback_rate(&mut self, rate: f64);

    /// Enables or disables looping of the current source.
    fn set_loop(&mut self, enabled: bool);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds, once known.
    fn duration(&self) -> Option<f64>;

    /// Drains events that happened since the last call.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;
}
