// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 0.7;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f32 = 0.1;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// Non-finite input maps to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < 0.001
    }

    /// Returns a new volume shifted by `delta`, clamped to the valid range.
    #[must_use]
    pub fn adjust(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.1x to 16.0x).
pub mod speed_bounds {
    /// Minimum playback speed (0.1x = ten times slower).
    pub const MIN: f64 = 0.1;
    /// Maximum playback speed (16x).
    pub const MAX: f64 = 16.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
    /// Increment used by the standalone +/- controls.
    pub const STEP: f64 = 0.25;
    /// Preset speeds offered by the speed panel, ascending.
    pub const PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 3.0, 4.0];
}

/// Playback speed value, guaranteed to be within valid range (0.1x - 16.0x).
///
/// # Example
///
/// ```
/// use iced_tempo::domain::playback::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::new(2.0);
/// assert_eq!(speed.value(), 2.0);
///
/// // Values outside range are clamped
/// assert_eq!(PlaybackSpeed::new(100.0).value(), 16.0);
///
/// // ...or rejected when strict validation is needed
/// assert!(PlaybackSpeed::try_new(100.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    ///
    /// NaN maps to the default speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if speed.is_nan() {
            return Self::default();
        }
        Self(speed.clamp(speed_bounds::MIN, speed_bounds::MAX))
    }

    /// Creates a playback speed only if `speed` is finite and within range.
    #[must_use]
    pub fn try_new(speed: f64) -> Option<Self> {
        Self::is_valid(speed).then_some(Self(speed))
    }

    /// Returns true if `speed` is a finite value within the valid range.
    #[must_use]
    pub fn is_valid(speed: f64) -> bool {
        speed.is_finite() && (speed_bounds::MIN..=speed_bounds::MAX).contains(&speed)
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the speed one step faster, capped at the maximum.
    #[must_use]
    pub fn step_up(self) -> Self {
        Self((self.0 + speed_bounds::STEP).min(speed_bounds::MAX))
    }

    /// Returns the speed one step slower, floored at the minimum.
    #[must_use]
    pub fn step_down(self) -> Self {
        Self((self.0 - speed_bounds::STEP).max(speed_bounds::MIN))
    }

    /// Returns true if this is normal (1x) speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - speed_bounds::DEFAULT).abs() < f64::EPSILON
    }

    /// Returns true if this is the minimum speed.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - speed_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum speed.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - speed_bounds::MAX).abs() < 0.001
    }

    /// Formats the speed for display, e.g. `1.25x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", super::time::format_speed(self.0))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// MediaDuration
// =============================================================================

/// Length of the loaded media in seconds.
///
/// Zero means "not yet reported". Anything negative or non-finite coming from
/// a surface is treated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MediaDuration(f64);

impl MediaDuration {
    /// Duration for media whose length is not known yet.
    pub const UNKNOWN: Self = Self(0.0);

    /// Creates a media duration from seconds.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs)
        } else {
            Self::UNKNOWN
        }
    }

    /// Returns the duration in seconds (0 when unknown).
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Returns true once the surface has reported a positive duration.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.0 > 0.0
    }

    /// Wall-clock time needed to play the whole media at `speed`.
    #[must_use]
    pub fn at_speed(self, speed: f64) -> Option<f64> {
        if !self.is_known() || !(speed > 0.0) {
            return None;
        }
        let target = self.0 / speed;
        target.is_finite().then_some(target)
    }

    /// Speed required to play the whole media in `target_secs`.
    ///
    /// Returns `None` when the duration is unknown or the result is not a
    /// valid playback speed.
    #[must_use]
    pub fn speed_for_target(self, target_secs: f64) -> Option<PlaybackSpeed> {
        if !self.is_known() || !(target_secs > 0.0) {
            return None;
        }
        PlaybackSpeed::try_new(self.0 / target_secs)
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Keyboard seek step bounds (0.5 to 60.0 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default keyboard seek step in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Keyboard seek step in seconds (arrow keys).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
