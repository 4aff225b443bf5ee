// SPDX-License-Identifier: MPL-2.0
//! `iced_tempo` is a lightweight media player built with the Iced GUI framework.
//!
//! Its distinguishing feature is the speed panel: pick a playback speed
//! directly, or type how long the media should take and let the player
//! derive the speed from the media duration. Controls float over the stage
//! and hide themselves while media plays.

#![doc(html_root_url = "https://docs.rs/iced_tempo/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod player;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
