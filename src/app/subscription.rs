// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed to shortcuts and file
//! drops; a periodic tick drives surface polling, control auto-hide and
//! toast expiry.

use super::shortcuts;
use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between surface polls while media is loaded.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for keyboard shortcuts, dropped files and window lifecycle.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Maps a native event to an application message.
///
/// Keys already handled by a widget (typing in a text field) are skipped,
/// except for the few shortcuts that must work from inside a field.
fn route_event(
    event: event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Opened { .. }) => {
            Some(Message::WindowOpened(window_id))
        }
        event::Event::Window(window::Event::Resized(_)) => Some(Message::WindowResized(window_id)),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Keyboard(keyboard_event) => {
            let action = shortcuts::action_for_event(&keyboard_event)?;
            match status {
                event::Status::Ignored => Some(Message::Shortcut(action, window_id)),
                event::Status::Captured if action.bypasses_capture() => {
                    Some(Message::Shortcut(action, window_id))
                }
                event::Status::Captured => None,
            }
        }
        _ => None,
    }
}

/// Creates the periodic tick while anything time-based is active.
pub fn create_tick_subscription(has_media: bool, has_notifications: bool) -> Subscription<Message> {
    if has_media || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
