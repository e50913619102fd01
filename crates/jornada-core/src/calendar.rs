use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Saturday and Sunday, the two weekend days of a
/// Monday-start, five day working week.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Iterates every calendar day in the inclusive range [start, end].
/// Yields nothing if `end` is before `start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Number of calendar days in [start, end], counting both endpoints.
/// This is the whole-day difference between `start` and the day after `end`.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
