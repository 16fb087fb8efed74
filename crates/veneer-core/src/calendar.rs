//! Calendar helpers for month and year arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// A year known to be a leap year, used when asking for the maximal number
/// of days a month can have.
pub const WELL_KNOWN_LEAP_YEAR: i32 = 2000;

/// Returns the month (1-12) of a UTC timestamp.
#[inline]
pub fn month(timestamp: DateTime<Utc>) -> u32 {
    timestamp.month()
}

/// Returns the year of a UTC timestamp.
#[inline]
pub fn year(timestamp: DateTime<Utc>) -> i32 {
    timestamp.year()
}

/// Returns the number of days in the given month of the given year, or 0
/// when the month is not in 1-12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_month {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 0,
    }
}

/// Returns the maximal number of days the given month can have in any year.
pub fn max_days_in_month(month: u32) -> u32 {
    days_in_month(month, WELL_KNOWN_LEAP_YEAR)
}
