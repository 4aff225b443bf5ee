// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player core and presentation layer consume the ports
//!
//! # Example
//!
//! ```ignore
//! use iced_tempo::application::port::MediaSurface;
//!
//! // Infrastructure implements the port trait
//! struct RodioSurface { /* ... */ }
//! impl MediaSurface for RodioSurface { /* ... */ }
//! ```

pub mod port;
