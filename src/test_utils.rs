// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the player ports and float comparison helpers.
//!
//! [`FakeSurface`] records every property write and queues the events a
//! real surface would emit, so controllers can be driven without audio
//! hardware. [`RecordingCursor`] keeps the history of cursor changes.

use crate::application::port::{CursorHost, MediaSurface, PlaybackError, SurfaceEvent};
use crate::domain::media::MediaSource;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Asserts two f64 values are within `F64_EPSILON` (or a given epsilon).
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, $crate::test_utils::F64_EPSILON)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right) = ($left, $right);
        assert!(
            (left - right).abs() <= $epsilon,
            "assertion failed: {} ≈ {} (epsilon {})",
            left,
            right,
            $epsilon
        );
    }};
}

/// In-memory media surface.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub loaded: Option<MediaSource>,
    pub playing: bool,
    pub volume: f32,
    pub rate: f64,
    pub looping: bool,
    pub position: f64,
    /// Duration reported after each load; `None` simulates late metadata.
    pub media_duration: Option<f64>,
    /// Error returned by the next `load` call.
    pub fail_next_load: Option<PlaybackError>,
    /// Number of successful loads.
    pub loads: usize,
    events: Vec<SurfaceEvent>,
}

impl FakeSurface {
    /// Surface whose media all report `secs` as their duration on load.
    #[must_use]
    pub fn with_duration(secs: f64) -> Self {
        Self {
            media_duration: Some(secs),
            ..Self::default()
        }
    }

    /// Queues an event as if the surface emitted it.
    pub fn emit(&mut self, event: SurfaceEvent) {
        self.events.push(event);
    }

    /// Simulates the current media playing to its end.
    pub fn finish(&mut self) {
        if let Some(duration) = self.media_duration {
            self.position = duration;
            self.events.push(SurfaceEvent::TimeUpdate(duration));
        }
        self.playing = false;
        self.events.push(SurfaceEvent::Pause);
        self.events.push(SurfaceEvent::Ended);
    }
}

impl MediaSurface for FakeSurface {
    fn load(&mut self, source: &MediaSource) -> Result<(), PlaybackError> {
        if let Some(err) = self.fail_next_load.take() {
            self.loaded = None;
            return Err(err);
        }
        self.loaded = Some(source.clone());
        self.playing = false;
        self.position = 0.0;
        self.loads += 1;
        if let Some(duration) = self.media_duration {
            self.events.push(SurfaceEvent::LoadedMetadata(duration));
        }
        Ok(())
    }

    fn unload(&mut self) {
        self.loaded = None;
        self.playing = false;
        self.position = 0.0;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.loaded.is_none() {
            return Err(PlaybackError::Io("nothing loaded".into()));
        }
        self.playing = true;
        self.events.push(SurfaceEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.events.push(SurfaceEvent::Pause);
        }
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), PlaybackError> {
        self.position = position_secs;
        self.events.push(SurfaceEvent::TimeUpdate(position_secs));
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.as_ref().and(self.media_duration)
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Cursor host that records every visibility request.
#[derive(Debug, Default)]
pub struct RecordingCursor {
    pub calls: Vec<bool>,
}

impl RecordingCursor {
    /// Last requested visibility; the cursor starts visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.calls.last().copied().unwrap_or(true)
    }
}

impl CursorHost for RecordingCursor {
    fn set_cursor_visible(&mut self, visible: bool) {
        self.calls.push(visible);
    }
}
