// SPDX-License-Identifier: MPL-2.0
//! Time and speed text representations.
//!
//! Times render as `M:SS`, or `H:MM:SS` from one hour up. The same grammar
//! is accepted back by [`parse_time`], so a formatted value always parses.

/// Rendered for negative or non-finite times.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Formats seconds as `M:SS` or `H:MM:SS`.
///
/// Fractional seconds are truncated.
///
/// ```
/// use iced_tempo::domain::playback::format_time;
///
/// assert_eq!(format_time(65.9), "1:05");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return TIME_PLACEHOLDER.to_string();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = seconds.floor() as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Parses `M:SS` or `H:MM:SS` into total seconds.
///
/// Each part must be a non-negative decimal number. Any other part count or
/// a non-numeric part yields `None`. A zero total is returned as `Some(0.0)`;
/// callers decide whether zero is usable.
#[must_use]
pub fn parse_time(text: &str) -> Option<f64> {
    let parts = text
        .trim()
        .split(':')
        .map(parse_time_part)
        .collect::<Option<Vec<f64>>>()?;

    let total = match parts.as_slice() {
        [minutes, seconds] => minutes * 60.0 + seconds,
        [hours, minutes, seconds] => hours * 3600.0 + minutes * 60.0 + seconds,
        _ => return None,
    };

    total.is_finite().then_some(total)
}

fn parse_time_part(part: &str) -> Option<f64> {
    let value: f64 = part.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Formats a speed multiplier with two decimals, without the `x` suffix.
#[must_use]
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.2}")
}

/// Parses a speed multiplier typed by the user.
///
/// Accepts a plain decimal number with surrounding whitespace and an
/// optional trailing `x`. A comma works as the decimal separator, as typed
/// in French and most European locales. Range validation is left to the
/// caller.
#[must_use]
pub fn parse_speed(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let number = trimmed
        .strip_suffix(['x', 'X'])
        .map_or(trimmed, str::trim_end);
    let value: f64 = number.replacen(',', ".", 1).parse().ok()?;
    value.is_finite().then_some(value)
}
