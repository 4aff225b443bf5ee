// SPDX-License-Identifier: MPL-2.0
//! Player core.
//!
//! - [`speed_editor`]: speed and target-duration editing session
//! - [`controls_visibility`]: when the floating controls and cursor show
//! - [`playlist`]: ordered sources with a current position
//! - [`controller`]: glue applying all of the above to a media surface

pub mod controller;
pub mod controls_visibility;
pub mod playlist;
pub mod speed_editor;

pub use controller::{Notice, PlayerController, PlayerSettings, Preferences};
pub use controls_visibility::Visibility;
pub use playlist::Playlist;
pub use speed_editor::{SpeedEditSession, TextField};
