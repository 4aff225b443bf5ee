// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind), [`MediaSource`](media::MediaSource),
//!   [`TrackInfo`](media::TrackInfo))
//! - [`playback`]: Playback types ([`PlaybackSpeed`](playback::PlaybackSpeed),
//!   [`Volume`](playback::Volume), [`MediaDuration`](playback::MediaDuration))
//! - [`ui`]: UI value objects ([`DwellWindow`](ui::DwellWindow))

pub mod media;
pub mod playback;
pub mod ui;
