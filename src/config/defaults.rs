// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The numeric bounds live with the domain newtypes that enforce them; this
//! module names the defaults the settings file falls back to.
//!
//! # Categories
//!
//! - **Playback**: Volume, speed and seek step defaults
//! - **Controls**: Auto-hide dwell window

use crate::domain::playback::{seek_step_bounds, speed_bounds, volume_bounds};
use crate::domain::ui::dwell_bounds;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

/// Default volume change per arrow key press (10%).
pub const DEFAULT_VOLUME_STEP: f32 = volume_bounds::STEP;

/// Smallest accepted volume step.
pub const MIN_VOLUME_STEP: f32 = 0.01;

/// Largest accepted volume step.
pub const MAX_VOLUME_STEP: f32 = 0.5;

/// Default committed playback speed.
pub const DEFAULT_PLAYBACK_SPEED: f64 = speed_bounds::DEFAULT;

/// Default keyboard seek step in seconds (arrow keys).
pub const DEFAULT_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default auto-hide delay for the floating controls (in seconds).
pub const DEFAULT_HIDE_DELAY_SECS: u32 = dwell_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(volume_bounds::MIN == 0.0);
    assert!(volume_bounds::MAX == 1.0);
    assert!(DEFAULT_VOLUME >= volume_bounds::MIN);
    assert!(DEFAULT_VOLUME <= volume_bounds::MAX);
    assert!(MIN_VOLUME_STEP > 0.0);
    assert!(DEFAULT_VOLUME_STEP >= MIN_VOLUME_STEP);
    assert!(DEFAULT_VOLUME_STEP <= MAX_VOLUME_STEP);

    // Playback speed validation
    assert!(speed_bounds::MIN > 0.0);
    assert!(speed_bounds::MAX > speed_bounds::MIN);
    assert!(DEFAULT_PLAYBACK_SPEED >= speed_bounds::MIN);
    assert!(DEFAULT_PLAYBACK_SPEED <= speed_bounds::MAX);
    assert!(speed_bounds::STEP > 0.0);

    // Presets must be ascending and within bounds
    assert!(!speed_bounds::PRESETS.is_empty());
    let mut i = 0;
    while i < speed_bounds::PRESETS.len() {
        assert!(speed_bounds::PRESETS[i] >= speed_bounds::MIN);
        assert!(speed_bounds::PRESETS[i] <= speed_bounds::MAX);
        if i > 0 {
            assert!(speed_bounds::PRESETS[i] > speed_bounds::PRESETS[i - 1]);
        }
        i += 1;
    }

    // Seek step validation
    assert!(seek_step_bounds::MIN > 0.0);
    assert!(DEFAULT_SEEK_STEP_SECS >= seek_step_bounds::MIN);
    assert!(DEFAULT_SEEK_STEP_SECS <= seek_step_bounds::MAX);

    // Dwell window validation
    assert!(dwell_bounds::MIN > 0);
    assert!(dwell_bounds::MAX >= dwell_bounds::MIN);
    assert!(DEFAULT_HIDE_DELAY_SECS >= dwell_bounds::MIN);
    assert!(DEFAULT_HIDE_DELAY_SECS <= dwell_bounds::MAX);
};
