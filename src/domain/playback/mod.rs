// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! Value objects for speed, volume, durations and their text forms. They are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod state;
pub mod time;

pub use newtypes::{
    seek_step_bounds, speed_bounds, volume_bounds, MediaDuration, PlaybackSpeed, SeekStep, Volume,
};
pub use state::PlaybackState;
pub use time::{format_speed, format_time, parse_speed, parse_time, TIME_PLACEHOLDER};
