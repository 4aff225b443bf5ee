// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Notifications report what happened outside the player's control: a file
//! that could not be opened, a folder without media, tags that could not be
//! read, a settings file that was ignored.
//!
//! - Success/info toasts dismiss after 3 s, warnings after 5 s, errors stay
//!   until dismissed.
//! - At most 3 toasts are visible; the rest wait in a queue.
//! - Toasts stack in the bottom-right corner.
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-folder-empty"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
