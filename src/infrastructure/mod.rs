// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `rodio`
//! and `lofty`.
//!
//! # Available Adapters
//!
//! - [`rodio_surface`]: Audio playback via `rodio` (implements [`MediaSurface`])
//! - [`lofty_metadata`]: Tag reading via `lofty` (implements [`MetadataReader`])
//!
//! [`MediaSurface`]: crate::application::port::MediaSurface
//! [`MetadataReader`]: crate::application::port::MetadataReader

pub mod lofty_metadata;
pub mod rodio_surface;

// Re-export main types for convenience
pub use lofty_metadata::{header_duration, LoftyMetadataReader};
pub use rodio_surface::RodioSurface;
