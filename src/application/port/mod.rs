// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the player logic remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`surface`]: Playback of a source (play, pause, seek, volume, rate, loop)
//! - [`metadata`]: Audio tag reading
//! - [`cursor`]: Pointer cursor visibility over the player
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `rodio` types)
//! - Methods that can fail return `Result` with port error types
//! - No `async fn` - use Iced's `Task` return type pattern in callers
//!
//! # Example
//!
//! ```ignore
//! use iced_tempo::application::port::MediaSurface;
//! use iced_tempo::domain::media::MediaSource;
//!
//! fn start(surface: &mut impl MediaSurface, source: &MediaSource) {
//!     if surface.load(source).is_ok() {
//!         let _ = surface.play();
//!     }
//! }
//! ```

pub mod cursor;
pub mod metadata;
pub mod surface;

// Re-export main types for convenience
pub use cursor::{CursorFlag, CursorHost};
pub use metadata::{MetadataError, MetadataReader};
pub use surface::{MediaSurface, PlaybackError, SurfaceEvent};
