// SPDX-License-Identifier: MPL-2.0
//! Visibility of the floating transport controls.
//!
//! Controls are pinned visible while media is paused or the speed panel is
//! open. While playing, pointer activity shows them for a dwell window after
//! which they hide again. In fullscreen the pointer cursor follows the
//! controls: hidden with them, shown with them.
//!
//! Time is passed in by the caller, so a single pending deadline stands in
//! for the auto-hide timer. Setting a new deadline replaces the old one.

use crate::application::port::CursorHost;
use crate::domain::ui::DwellWindow;
use std::time::Instant;

/// Current visibility of the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    /// Visible until playback resumes (paused, or speed panel open).
    VisibleSticky,
    /// Visible until `hide_at` unless the pointer moves again.
    VisibleTimed { hide_at: Instant },
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Controls visibility state.
#[derive(Debug, Clone)]
pub struct State {
    visibility: Visibility,
    playing: bool,
    edit_session_open: bool,
    fullscreen: bool,
    dwell: DwellWindow,
}

/// Messages for the controls visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Media reported it started playing.
    PlaybackStarted,
    /// Media reported it paused (or stopped, or ended).
    PlaybackPaused,
    /// Pointer moved over the player.
    PointerMoved,
    /// Pointer left the player area.
    PointerLeft,
    /// Speed panel opened.
    EditSessionOpened,
    /// Speed panel closed by commit or cancel.
    EditSessionClosed,
    /// Window entered or left fullscreen.
    FullscreenChanged(bool),
    /// Periodic clock tick; hides the controls once the deadline passed.
    Tick,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    /// Creates the state for paused media, controls visible.
    #[must_use]
    pub fn new(dwell: DwellWindow) -> Self {
        Self {
            visibility: Visibility::VisibleSticky,
            playing: false,
            edit_session_open: false,
            fullscreen: false,
            dwell,
        }
    }

    /// Handle a visibility message at time `now`.
    ///
    /// The cursor policy is re-applied to `host` whenever visibility or
    /// fullscreen status changes.
    pub fn handle<H: CursorHost + ?Sized>(
        &mut self,
        msg: Message,
        now: Instant,
        host: &mut H,
    ) -> Effect {
        let was_visible = self.is_visible();
        let was_fullscreen = self.fullscreen;

        match msg {
            Message::PlaybackStarted => {
                self.playing = true;
                self.visibility = self.resting_visibility();
            }
            Message::PlaybackPaused => {
                self.playing = false;
                self.visibility = Visibility::VisibleSticky;
            }
            Message::PointerMoved => {
                if self.auto_hides() {
                    self.visibility = Visibility::VisibleTimed {
                        hide_at: now + self.dwell.as_duration(),
                    };
                }
            }
            Message::PointerLeft => {
                if self.auto_hides() {
                    self.visibility = Visibility::Hidden;
                }
            }
            Message::EditSessionOpened => {
                self.edit_session_open = true;
                self.visibility = Visibility::VisibleSticky;
            }
            Message::EditSessionClosed => {
                self.edit_session_open = false;
                self.visibility = self.resting_visibility();
            }
            Message::FullscreenChanged(fullscreen) => {
                self.fullscreen = fullscreen;
            }
            Message::Tick => {
                if let Visibility::VisibleTimed { hide_at } = self.visibility {
                    if now >= hide_at && self.auto_hides() {
                        self.visibility = Visibility::Hidden;
                    }
                }
            }
        }

        let visible = self.is_visible();
        if visible != was_visible || self.fullscreen != was_fullscreen {
            host.set_cursor_visible(self.cursor_visible());
        }

        if visible == was_visible {
            Effect::None
        } else {
            Effect::VisibilityChanged(visible)
        }
    }

    /// Changes the dwell window used for future pointer activity.
    pub fn set_dwell(&mut self, dwell: DwellWindow) {
        self.dwell = dwell;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Whether the pointer cursor should be shown over the player.
    ///
    /// Always true outside fullscreen.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        !self.fullscreen || self.is_visible()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn dwell(&self) -> DwellWindow {
        self.dwell
    }

    /// Pointer activity only matters while playing with the panel closed.
    fn auto_hides(&self) -> bool {
        self.playing && !self.edit_session_open
    }

    fn resting_visibility(&self) -> Visibility {
        if self.auto_hides() {
            Visibility::Hidden
        } else {
            Visibility::VisibleSticky
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DwellWindow::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CursorFlag;
    use std::time::Duration;

    fn playing(now: Instant, host: &mut CursorFlag) -> State {
        let mut state = State::default();
        state.handle(Message::PlaybackStarted, now, host);
        state
    }

    #[test]
    fn starts_visible_and_sticky() {
        assert_eq!(State::default().visibility(), Visibility::VisibleSticky);
    }

    #[test]
    fn playing_hides_controls() {
        let mut host = CursorFlag::default();
        let mut state = State::default();
        let effect = state.handle(Message::PlaybackStarted, Instant::now(), &mut host);
        assert_eq!(effect, Effect::VisibilityChanged(false));
        assert_eq!(state.visibility(), Visibility::Hidden);
    }

    #[test]
    fn pointer_move_shows_until_deadline() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);

        assert_eq!(
            state.handle(Message::PointerMoved, t0, &mut host),
            Effect::VisibilityChanged(true)
        );
        state.handle(Message::Tick, t0 + Duration::from_millis(2999), &mut host);
        assert!(state.is_visible());

        assert_eq!(
            state.handle(Message::Tick, t0 + Duration::from_secs(3), &mut host),
            Effect::VisibilityChanged(false)
        );
    }

    #[test]
    fn pointer_move_resets_deadline() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);

        state.handle(Message::PointerMoved, t0, &mut host);
        let t1 = t0 + Duration::from_millis(2900);
        assert_eq!(state.handle(Message::PointerMoved, t1, &mut host), Effect::None);

        state.handle(Message::Tick, t0 + Duration::from_secs(3), &mut host);
        assert!(state.is_visible());
        state.handle(Message::Tick, t1 + Duration::from_secs(3), &mut host);
        assert!(!state.is_visible());
    }

    #[test]
    fn pointer_leave_hides_immediately_while_playing() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);
        state.handle(Message::PointerMoved, t0, &mut host);
        state.handle(Message::PointerLeft, t0, &mut host);
        assert_eq!(state.visibility(), Visibility::Hidden);
    }

    #[test]
    fn pause_pins_and_cancels_deadline() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);
        state.handle(Message::PointerMoved, t0, &mut host);
        state.handle(Message::PlaybackPaused, t0, &mut host);

        state.handle(Message::Tick, t0 + Duration::from_secs(60), &mut host);
        state.handle(Message::PointerLeft, t0, &mut host);
        assert_eq!(state.visibility(), Visibility::VisibleSticky);
    }

    #[test]
    fn open_panel_survives_resume_and_pointer_leave() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = State::default();
        state.handle(Message::EditSessionOpened, t0, &mut host);
        state.handle(Message::PlaybackStarted, t0, &mut host);
        state.handle(Message::PointerLeft, t0, &mut host);
        state.handle(Message::Tick, t0 + Duration::from_secs(10), &mut host);
        assert_eq!(state.visibility(), Visibility::VisibleSticky);
    }

    #[test]
    fn closing_panel_recomputes_from_playback() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();

        let mut state = playing(t0, &mut host);
        state.handle(Message::EditSessionOpened, t0, &mut host);
        state.handle(Message::EditSessionClosed, t0, &mut host);
        assert_eq!(state.visibility(), Visibility::Hidden);

        let mut paused = State::default();
        paused.handle(Message::EditSessionOpened, t0, &mut host);
        paused.handle(Message::EditSessionClosed, t0, &mut host);
        assert_eq!(paused.visibility(), Visibility::VisibleSticky);
    }

    #[test]
    fn cursor_follows_controls_only_in_fullscreen() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);
        // Windowed: hidden controls keep the cursor
        assert!(host.is_visible());

        state.handle(Message::FullscreenChanged(true), t0, &mut host);
        assert!(!host.is_visible());

        state.handle(Message::PointerMoved, t0, &mut host);
        assert!(host.is_visible());

        state.handle(Message::Tick, t0 + Duration::from_secs(3), &mut host);
        assert!(!host.is_visible());

        state.handle(Message::FullscreenChanged(false), t0, &mut host);
        assert!(host.is_visible());
    }

    #[test]
    fn custom_dwell_window_is_used() {
        let mut host = CursorFlag::default();
        let t0 = Instant::now();
        let mut state = playing(t0, &mut host);
        state.set_dwell(DwellWindow::new(10));
        state.handle(Message::PointerMoved, t0, &mut host);
        state.handle(Message::Tick, t0 + Duration::from_secs(5), &mut host);
        assert!(state.is_visible());
        state.handle(Message::Tick, t0 + Duration::from_secs(10), &mut host);
        assert!(!state.is_visible());
    }
}
