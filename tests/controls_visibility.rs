// SPDX-License-Identifier: MPL-2.0
//! Auto-hide behaviour of the floating controls, driven with explicit time.

use iced_tempo::domain::ui::DwellWindow;
use iced_tempo::player::controls_visibility::{Effect, Message, State};
use iced_tempo::player::Visibility;
use iced_tempo::test_utils::RecordingCursor;
use std::time::{Duration, Instant};

fn playing_state(now: Instant, cursor: &mut RecordingCursor) -> State {
    let mut state = State::new(DwellWindow::default());
    state.handle(Message::PlaybackStarted, now, cursor);
    state
}

#[test]
fn controls_hide_after_three_idle_seconds() {
    let start = Instant::now();
    let mut cursor = RecordingCursor::default();
    let mut state = playing_state(start, &mut cursor);

    assert_eq!(
        state.handle(Message::PointerMoved, start, &mut cursor),
        Effect::VisibilityChanged(true)
    );
    state.handle(Message::Tick, start + Duration::from_millis(2_999), &mut cursor);
    assert!(state.is_visible());

    assert_eq!(
        state.handle(Message::Tick, start + Duration::from_secs(3), &mut cursor),
        Effect::VisibilityChanged(false)
    );
    assert_eq!(state.visibility(), Visibility::Hidden);
}

#[test]
fn movement_at_two_point_nine_seconds_restarts_the_window() {
    let start = Instant::now();
    let mut cursor = RecordingCursor::default();
    let mut state = playing_state(start, &mut cursor);

    state.handle(Message::PointerMoved, start, &mut cursor);
    let refresh = start + Duration::from_millis(2_900);
    state.handle(Message::PointerMoved, refresh, &mut cursor);

    state.handle(Message::Tick, start + Duration::from_secs(3), &mut cursor);
    state.handle(Message::Tick, refresh + Duration::from_millis(2_999), &mut cursor);
    assert!(state.is_visible());

    state.handle(Message::Tick, refresh + Duration::from_secs(3), &mut cursor);
    assert!(!state.is_visible());
}

#[test]
fn paused_with_open_panel_survives_pointer_leave() {
    let now = Instant::now();
    let mut cursor = RecordingCursor::default();
    let mut state = State::default();

    state.handle(Message::PlaybackPaused, now, &mut cursor);
    state.handle(Message::EditSessionOpened, now, &mut cursor);
    let effect = state.handle(Message::PointerLeft, now, &mut cursor);

    assert_eq!(effect, Effect::None);
    assert_eq!(state.visibility(), Visibility::VisibleSticky);
}

#[test]
fn closing_panel_while_playing_hides_controls() {
    let now = Instant::now();
    let mut cursor = RecordingCursor::default();
    let mut state = playing_state(now, &mut cursor);

    state.handle(Message::EditSessionOpened, now, &mut cursor);
    state.handle(Message::PointerLeft, now, &mut cursor);
    assert_eq!(state.visibility(), Visibility::VisibleSticky);

    state.handle(Message::EditSessionClosed, now, &mut cursor);
    assert_eq!(state.visibility(), Visibility::Hidden);
}

#[test]
fn fullscreen_cursor_tracks_controls() {
    let start = Instant::now();
    let mut cursor = RecordingCursor::default();
    let mut state = playing_state(start, &mut cursor);
    assert!(cursor.visible(), "cursor stays visible outside fullscreen");
    cursor.calls.clear();

    state.handle(Message::FullscreenChanged(true), start, &mut cursor);
    assert!(!cursor.visible());

    state.handle(Message::PointerMoved, start, &mut cursor);
    assert!(cursor.visible());

    state.handle(Message::Tick, start + Duration::from_secs(3), &mut cursor);
    assert!(!cursor.visible());

    state.handle(Message::FullscreenChanged(false), start, &mut cursor);
    assert!(cursor.visible());
    assert_eq!(cursor.calls, vec![false, true, false, true]);
}
