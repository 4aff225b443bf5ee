// SPDX-License-Identifier: MPL-2.0
//! Speed and target-duration editing.
//!
//! A [`SpeedEditSession`] lives while the speed panel is open. It keeps a
//! candidate speed and two text mirrors consistent with each other:
//!
//! - `speed_text` is the candidate formatted with two decimals,
//! - `duration_text` is the media duration divided by the candidate, as `M:SS`
//!   or `H:MM:SS`.
//!
//! Each entry point (preset, slider, speed text, duration text) updates the
//! candidate first and then rewrites the *other* mirrors, never the field the
//! user is typing into. Text that does not parse, or that would produce an
//! out-of-range speed, is kept on screen but leaves the candidate untouched.
//! Blurring a field rewrites it from the candidate.

use crate::domain::playback::{format_speed, format_time, parse_speed, parse_time};
use crate::domain::playback::{MediaDuration, PlaybackSpeed};

/// Text field of the speed panel that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Speed,
    Duration,
}

/// Ephemeral state of one open speed panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedEditSession {
    candidate: f64,
    speed_text: String,
    duration_text: String,
    media_duration: MediaDuration,
    editing: Option<TextField>,
}

impl SpeedEditSession {
    /// Opens a session seeded from the committed speed.
    ///
    /// The duration text is filled right away when the media duration is
    /// known and left empty otherwise.
    #[must_use]
    pub fn open(current: PlaybackSpeed, media_duration: MediaDuration) -> Self {
        let mut session = Self {
            candidate: current.value(),
            speed_text: format_speed(current.value()),
            duration_text: String::new(),
            media_duration,
            editing: None,
        };
        session.refresh_duration_text();
        session
    }

    /// Selects one of [`speed_bounds::PRESETS`](crate::domain::playback::speed_bounds::PRESETS).
    pub fn select_preset(&mut self, preset: f64) {
        self.editing = None;
        self.set_candidate(PlaybackSpeed::new(preset));
    }

    /// Applies a raw slider position.
    pub fn set_from_slider(&mut self, raw: f64) {
        self.editing = None;
        self.set_candidate(PlaybackSpeed::new(raw));
    }

    /// Stores typed speed text and applies it if it is a valid speed.
    ///
    /// Returns true if the candidate changed.
    pub fn set_speed_text(&mut self, text: impl Into<String>) -> bool {
        self.speed_text = text.into();
        self.editing = Some(TextField::Speed);

        let Some(speed) = parse_speed(&self.speed_text).and_then(PlaybackSpeed::try_new) else {
            return false;
        };
        self.candidate = speed.value();
        self.refresh_duration_text();
        true
    }

    /// Speed field lost focus or was submitted.
    ///
    /// Valid text is normalized to two decimals, anything else reverts to
    /// the candidate.
    pub fn blur_speed_text(&mut self) {
        if self.editing == Some(TextField::Speed) {
            self.editing = None;
        }
        self.speed_text = format_speed(self.candidate);
    }

    /// Stores typed duration text and derives the speed from it.
    ///
    /// The text is parsed as `M:SS` or `H:MM:SS`. The candidate changes only
    /// if the media duration is known, the parsed total is positive and the
    /// required speed is within range. Returns true if the candidate changed.
    pub fn set_duration_text(&mut self, text: impl Into<String>) -> bool {
        self.duration_text = text.into();
        self.editing = Some(TextField::Duration);

        let Some(speed) = parse_time(&self.duration_text)
            .and_then(|target| self.media_duration.speed_for_target(target))
        else {
            return false;
        };
        self.candidate = speed.value();
        self.speed_text = format_speed(self.candidate);
        true
    }

    /// Duration field lost focus or was submitted.
    ///
    /// Rewritten to the target duration of the candidate, or cleared when the
    /// media duration is unknown.
    pub fn blur_duration_text(&mut self) {
        if self.editing == Some(TextField::Duration) {
            self.editing = None;
        }
        self.duration_text = self.formatted_target().unwrap_or_default();
    }

    /// Blurs whichever field currently has focus.
    pub fn blur(&mut self) {
        match self.editing {
            Some(TextField::Speed) => self.blur_speed_text(),
            Some(TextField::Duration) => self.blur_duration_text(),
            None => {}
        }
    }

    /// Updates the media duration while the panel is open.
    ///
    /// The duration text follows unless the user is typing into it.
    pub fn set_media_duration(&mut self, media_duration: MediaDuration) {
        self.media_duration = media_duration;
        if self.editing != Some(TextField::Duration) {
            self.refresh_duration_text();
        }
    }

    /// Ends the session, returning the speed to commit.
    ///
    /// `None` means the candidate is not a valid speed and the committed
    /// speed must stay as it was.
    #[must_use]
    pub fn commit(self) -> Option<PlaybackSpeed> {
        PlaybackSpeed::try_new(self.candidate)
    }

    /// Ends the session without producing a speed.
    #[allow(clippy::needless_pass_by_value)]
    pub fn cancel(self) {}

    #[must_use]
    pub fn candidate(&self) -> f64 {
        self.candidate
    }

    #[must_use]
    pub fn speed_text(&self) -> &str {
        &self.speed_text
    }

    #[must_use]
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    #[must_use]
    pub fn media_duration(&self) -> MediaDuration {
        self.media_duration
    }

    /// Field that currently has focus, if any.
    #[must_use]
    pub fn editing(&self) -> Option<TextField> {
        self.editing
    }

    /// True while a text field has focus; the panel must not auto-close.
    #[must_use]
    pub fn is_editing_text(&self) -> bool {
        self.editing.is_some()
    }

    /// Target duration in seconds for the candidate, if the media duration is known.
    #[must_use]
    pub fn target_duration(&self) -> Option<f64> {
        self.media_duration.at_speed(self.candidate)
    }

    fn set_candidate(&mut self, speed: PlaybackSpeed) {
        self.candidate = speed.value();
        self.speed_text = format_speed(self.candidate);
        self.refresh_duration_text();
    }

    fn refresh_duration_text(&mut self) {
        self.duration_text = self.formatted_target().unwrap_or_default();
    }

    fn formatted_target(&self) -> Option<String> {
        self.target_duration().map(format_time)
    }
}
