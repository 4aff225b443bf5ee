// SPDX-License-Identifier: MPL-2.0
//! Player views. Each takes a view context plus read-only state and emits
//! its own `Message`, which the application maps into its own.

pub mod controls;
pub mod empty_state;
pub mod now_playing;
pub mod playlist_panel;
pub mod speed_panel;
