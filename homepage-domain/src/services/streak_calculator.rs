use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, TimeZone};

use crate::entities::{ActivityEvent, Streak};
use crate::utils::local_date;

/// Number of calendar days, today included, the streak walk looks at.
pub const STREAK_WINDOW_DAYS: u64 = 365;

/// Distinct calendar dates (in `tz`) that carry at least one event.
pub fn active_dates<Tz: TimeZone>(events: &[ActivityEvent], tz: &Tz) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .map(|event| local_date(&event.created_at, tz))
        .collect()
}

/// Walks back from today (or yesterday when today is idle) and counts
/// consecutive active dates, stopping at the first gap.
///
/// Returns `None` when no date inside the window is active.
pub fn calculate_streak(active: &BTreeSet<NaiveDate>, today: NaiveDate) -> Option<Streak> {
    let window_start = today
        .checked_sub_days(Days::new(STREAK_WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);
    active.range(window_start..=today).next()?;

    let open = active.contains(&today);
    let start = if open {
        Some(today)
    } else {
        today.pred_opt().filter(|day| active.contains(day))
    };

    let mut days = 0;
    let mut cursor = start;
    while let Some(day) = cursor {
        if day < window_start || !active.contains(&day) {
            break;
        }
        days += 1;
        cursor = day.pred_opt();
    }

    Some(Streak { days, open })
}

/// Convenience wrapper: normalise `events` into `tz` dates and calculate.
pub fn streak_from_events<Tz: TimeZone>(
    events: &[ActivityEvent],
    today: NaiveDate,
    tz: &Tz,
) -> Option<Streak> {
    if events.is_empty() {
        return None;
    }
    calculate_streak(&active_dates(events, tz), today)
}
