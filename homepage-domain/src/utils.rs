use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn unix_to_utc(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}
