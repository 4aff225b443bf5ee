// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the "state down, messages up" pattern: they borrow state and
//! return elements producing their own message types.
//!
//! - [`player`] - Transport controls, speed panel, now-playing card, playlist
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Button, container and tooltip styles
//! - [`design_tokens`] - Colors, spacing, sizing, typography
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod notifications;
pub mod player;
pub mod styles;
pub mod theming;
