// SPDX-License-Identifier: MPL-2.0
//! Property tests for the speed panel session.
//!
//! 1. Presets set the candidate exactly and derive the duration text.
//! 2. Opening then committing returns the committed speed unchanged.
//! 3. Valid speed or duration text keeps the two mirrors within a second.
//! 4. Non-numeric text never moves the candidate.
//! 5. Unknown media duration makes duration edits inert.
//! 6. Step controls stay within bounds.
//! 7. Formatted times parse back to the whole seconds they came from.

use iced_tempo::domain::playback::{
    format_speed, format_time, parse_time, speed_bounds, MediaDuration, PlaybackSpeed,
};
use iced_tempo::player::SpeedEditSession;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn valid_speed() -> impl Strategy<Value = f64> {
    speed_bounds::MIN..=speed_bounds::MAX
}

fn known_duration() -> impl Strategy<Value = f64> {
    1.0f64..36_000.0
}

fn preset() -> impl Strategy<Value = f64> {
    proptest::sample::select(speed_bounds::PRESETS.to_vec())
}

fn duration_gap(session: &SpeedEditSession) -> f64 {
    let media = session.media_duration().secs();
    let shown = parse_time(session.duration_text()).expect("duration text parses");
    (media / session.candidate() - shown).abs()
}

// ── 1. Presets ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn preset_sets_candidate_and_duration_text(
        start in valid_speed(),
        duration in known_duration(),
        preset in preset(),
    ) {
        let media = MediaDuration::from_secs(duration);
        let mut session = SpeedEditSession::open(PlaybackSpeed::new(start), media);

        session.select_preset(preset);

        prop_assert_eq!(session.candidate(), preset);
        prop_assert_eq!(session.speed_text(), format_speed(preset));
        prop_assert_eq!(session.duration_text(), format_time(duration / preset));
    }
}

// ── 2. Open then commit ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn commit_without_edits_is_identity(speed in valid_speed(), duration in 0.0f64..36_000.0) {
        let committed = PlaybackSpeed::new(speed);
        let session = SpeedEditSession::open(committed, MediaDuration::from_secs(duration));

        prop_assert_eq!(session.commit(), Some(committed));
    }
}

// ── 3. Mirror consistency ───────────────────────────────────────────────

proptest! {
    #[test]
    fn speed_text_keeps_duration_within_a_second(
        duration in known_duration(),
        hundredths in 10u32..=1600,
    ) {
        let mut session =
            SpeedEditSession::open(PlaybackSpeed::default(), MediaDuration::from_secs(duration));
        let text = format!("{}.{:02}", hundredths / 100, hundredths % 100);

        prop_assert!(session.set_speed_text(text.clone()));
        prop_assert_eq!(session.speed_text(), text.as_str());
        prop_assert!(duration_gap(&session) < 1.0);
    }

    #[test]
    fn duration_text_keeps_speed_consistent(
        duration in known_duration(),
        target in 1u32..=36_000,
    ) {
        let media = MediaDuration::from_secs(duration);
        let mut session = SpeedEditSession::open(PlaybackSpeed::default(), media);
        let before = session.candidate();
        let text = format_time(f64::from(target));

        let applied = session.set_duration_text(text.clone());
        let required = duration / f64::from(target);

        prop_assert_eq!(session.duration_text(), text.as_str());
        if PlaybackSpeed::is_valid(required) {
            prop_assert!(applied);
            prop_assert!((session.candidate() - required).abs() < 1e-9);
            prop_assert_eq!(session.speed_text(), format_speed(required));
            prop_assert!(duration_gap(&session) < 1.0);
        } else {
            prop_assert!(!applied);
            prop_assert_eq!(session.candidate(), before);
        }
    }
}

// ── 4. Malformed text ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn alphabetic_speed_text_never_moves_candidate(
        start in valid_speed(),
        text in "[a-z]{1,8}",
    ) {
        let mut session =
            SpeedEditSession::open(PlaybackSpeed::new(start), MediaDuration::from_secs(120.0));
        let before = session.candidate();

        prop_assert!(!session.set_speed_text(text.clone()));
        prop_assert_eq!(session.candidate(), before);
        prop_assert_eq!(session.speed_text(), text.as_str());

        session.blur_speed_text();
        prop_assert_eq!(session.speed_text(), format_speed(before));
    }

    #[test]
    fn out_of_range_speed_text_never_moves_candidate(
        start in valid_speed(),
        value in prop_oneof![0.0f64..0.099, 16.01f64..1000.0],
    ) {
        let mut session =
            SpeedEditSession::open(PlaybackSpeed::new(start), MediaDuration::from_secs(120.0));
        let before = session.candidate();

        let text = format!("{value:.3}");
        prop_assert!(!session.set_speed_text(text));
        prop_assert_eq!(session.candidate(), before);
    }

    #[test]
    fn malformed_duration_text_never_moves_candidate(
        start in valid_speed(),
        text in prop_oneof![
            Just(String::new()),
            Just("0:00".to_string()),
            "[0-9]{1,4}",
            "[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}",
            "[a-z]{1,3}:[0-9]{2}",
        ],
    ) {
        let mut session =
            SpeedEditSession::open(PlaybackSpeed::new(start), MediaDuration::from_secs(120.0));
        let before = session.candidate();

        prop_assert!(!session.set_duration_text(text));
        prop_assert_eq!(session.candidate(), before);
    }
}

// ── 5. Unknown duration ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn unknown_duration_makes_duration_edits_inert(
        start in valid_speed(),
        minutes in 0u32..600,
        seconds in 0u32..60,
    ) {
        let mut session = SpeedEditSession::open(PlaybackSpeed::new(start), MediaDuration::UNKNOWN);
        let before = session.candidate();

        let text = format!("{minutes}:{seconds:02}");
        prop_assert!(!session.set_duration_text(text));
        prop_assert_eq!(session.candidate(), before);

        session.blur_duration_text();
        prop_assert_eq!(session.duration_text(), "");
    }
}

// ── 6. Step controls ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn steps_stay_in_range(speed in valid_speed()) {
        let speed = PlaybackSpeed::new(speed);

        let up = speed.step_up().value();
        let down = speed.step_down().value();

        prop_assert!(up <= speed_bounds::MAX);
        prop_assert!(up >= speed.value());
        prop_assert!(down >= speed_bounds::MIN);
        prop_assert!(down <= speed.value());
    }
}

#[test]
fn steps_are_idempotent_at_the_bounds() {
    let max = PlaybackSpeed::new(speed_bounds::MAX);
    let min = PlaybackSpeed::new(speed_bounds::MIN);

    assert_eq!(max.step_up(), max);
    assert_eq!(min.step_down(), min);
}

// ── 7. Time text round trip ─────────────────────────────────────────────

proptest! {
    #[test]
    fn formatted_time_parses_back(secs in 0u32..360_000, fraction in 0.0f64..0.999) {
        let whole = f64::from(secs);
        let parsed = parse_time(&format_time(whole + fraction));

        prop_assert_eq!(parsed, Some(whole));
    }
}

#[test]
fn preset_two_then_two_minutes_scenario() {
    let mut session =
        SpeedEditSession::open(PlaybackSpeed::default(), MediaDuration::from_secs(120.0));

    session.select_preset(2.0);
    assert_eq!(session.candidate(), 2.0);
    assert_eq!(session.duration_text(), "1:00");

    assert!(session.set_duration_text("2:00"));
    assert_eq!(session.candidate(), 1.0);
    assert_eq!(session.speed_text(), "1.00");
}
