// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! Keys are mapped to [`Action`]s here; `update` decides what an action
//! does in the current state (Escape closes the speed panel before it
//! leaves fullscreen).

use iced::keyboard::{self, key::Named, Key, Modifiers};

/// A player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlayback,
    ToggleFullscreen,
    /// Close the speed panel, or leave fullscreen when no panel is open.
    Escape,
    ToggleMute,
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
    /// Ctrl/Cmd+Enter: apply the speed panel.
    CommitSpeed,
    SpeedDown,
    SpeedUp,
}

impl Action {
    /// Whether the action should fire even if a widget already handled
    /// the key. Enter is consumed by focused text inputs.
    #[must_use]
    pub fn bypasses_capture(self) -> bool {
        matches!(self, Action::CommitSpeed)
    }
}

/// Maps a pressed key to its action.
#[must_use]
pub fn action_for(key: &Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Named(Named::Enter) if modifiers.command() => Some(Action::CommitSpeed),
        // Leave other modified keys to the system.
        _ if modifiers.command() || modifiers.alt() => None,
        Key::Named(Named::Space) => Some(Action::TogglePlayback),
        Key::Named(Named::F11) => Some(Action::ToggleFullscreen),
        Key::Named(Named::Escape) => Some(Action::Escape),
        Key::Named(Named::ArrowLeft) => Some(Action::SeekBackward),
        Key::Named(Named::ArrowRight) => Some(Action::SeekForward),
        Key::Named(Named::ArrowUp) => Some(Action::VolumeUp),
        Key::Named(Named::ArrowDown) => Some(Action::VolumeDown),
        Key::Character(c) => match c.as_str() {
            "f" | "F" => Some(Action::ToggleFullscreen),
            "m" | "M" => Some(Action::ToggleMute),
            "[" => Some(Action::SpeedDown),
            "]" => Some(Action::SpeedUp),
            _ => None,
        },
        _ => None,
    }
}

/// Extracts an action from a raw keyboard event.
#[must_use]
pub fn action_for_event(event: &keyboard::Event) -> Option<Action> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => action_for(key, *modifiers),
        _ => None,
    }
}
