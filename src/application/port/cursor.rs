// SPDX-License-Identifier: MPL-2.0
//! Pointer cursor port.

/// Window capability to show or hide the pointer cursor over the player.
///
/// Injected into the controls visibility state instead of touching the
/// window directly, so the policy stays testable.
pub trait CursorHost {
    fn set_cursor_visible(&mut self, visible: bool);
}

/// Cursor host that only remembers the last requested visibility.
///
/// The application view reads it back to hide the pointer over the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorFlag {
    visible: bool,
}

impl CursorFlag {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }
}

impl Default for CursorFlag {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorHost for CursorFlag {
    fn set_cursor_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
