// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains core media types that are independent of any
//! presentation or infrastructure concerns.

pub mod track;
pub mod types;

// Re-export commonly used types
pub use track::{MediaTags, TrackInfo, UNTITLED_AUDIO};
pub use types::{is_supported, MediaKind, MediaSource, AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
