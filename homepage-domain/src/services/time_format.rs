use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const DAYS_PER_MONTH: f64 = 30.4375;
const DAYS_PER_YEAR: f64 = 365.25;

/// German date and time, e.g. `19.10.2026, 14:05:09`.
pub fn format_absolute<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant
        .with_timezone(tz)
        .format("%d.%m.%Y, %H:%M:%S")
        .to_string()
}

/// Relative phrase for the time between `then` and `now`.
pub fn format_relative(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format_elapsed(now.signed_duration_since(*then).num_seconds())
}

/// Maps elapsed seconds onto fixed thresholds. Negative input counts as zero.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = rounded(seconds as f64 / MINUTE as f64);
    let hours = rounded(seconds as f64 / HOUR as f64);
    let days = seconds as f64 / DAY as f64;

    if seconds < 45 {
        "gerade eben".to_string()
    } else if seconds < 90 {
        "vor einer Minute".to_string()
    } else if seconds < 45 * MINUTE {
        format!("vor {} Minuten", minutes)
    } else if seconds < 90 * MINUTE {
        "vor einer Stunde".to_string()
    } else if seconds < 22 * HOUR {
        format!("vor {} Stunden", hours)
    } else if seconds < 36 * HOUR {
        "vor einem Tag".to_string()
    } else if seconds < 26 * DAY {
        format!("vor {} Tagen", rounded(days))
    } else if seconds < 45 * DAY {
        "vor einem Monat".to_string()
    } else if seconds < 320 * DAY {
        format!("vor {} Monaten", rounded(days / DAYS_PER_MONTH).max(2))
    } else if seconds < 548 * DAY {
        "vor einem Jahr".to_string()
    } else {
        format!("vor {} Jahren", rounded(days / DAYS_PER_YEAR))
    }
}

fn rounded(value: f64) -> i64 {
    value.round() as i64
}
