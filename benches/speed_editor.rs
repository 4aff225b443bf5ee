// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for speed panel editing.
//!
//! Measures the performance of:
//! - Typing into the speed field (parse, validate, rewrite duration text)
//! - Typing into the duration field (parse time, derive speed)
//! - Time formatting used by the timeline labels

use criterion::{criterion_group, criterion_main, Criterion};
use iced_tempo::domain::playback::{format_time, parse_time, MediaDuration, PlaybackSpeed};
use iced_tempo::player::SpeedEditSession;
use std::hint::black_box;

/// Keystrokes of a user typing "1.75" then correcting it to "2".
const SPEED_KEYSTROKES: &[&str] = &["1", "1.", "1.7", "1.75", "1.7", "1.", "1", "", "2"];

/// Keystrokes of a user typing the target "1:12:30".
const DURATION_KEYSTROKES: &[&str] = &["1", "1:", "1:1", "1:12", "1:12:", "1:12:3", "1:12:30"];

fn bench_speed_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("speed_editor");
    let media = MediaDuration::from_secs(5_400.0);

    group.bench_function("type_speed_text", |b| {
        b.iter(|| {
            let mut session = SpeedEditSession::open(PlaybackSpeed::default(), media);
            for text in SPEED_KEYSTROKES {
                black_box(session.set_speed_text(*text));
            }
            session.blur_speed_text();
            black_box(session.commit());
        });
    });

    group.bench_function("type_duration_text", |b| {
        b.iter(|| {
            let mut session = SpeedEditSession::open(PlaybackSpeed::default(), media);
            for text in DURATION_KEYSTROKES {
                black_box(session.set_duration_text(*text));
            }
            session.blur_duration_text();
            black_box(session.commit());
        });
    });

    group.finish();
}

fn bench_time_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_text");

    group.bench_function("format_time", |b| {
        b.iter(|| {
            for secs in (0..10_000).step_by(37) {
                black_box(format_time(black_box(f64::from(secs))));
            }
        });
    });

    group.bench_function("parse_time", |b| {
        b.iter(|| black_box(parse_time(black_box("1:12:30"))));
    });

    group.finish();
}

criterion_group!(benches, bench_speed_text, bench_time_text);
criterion_main!(benches);
