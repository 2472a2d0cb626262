//! Calendar arithmetic on `NaiveDate` day values.
//!
//! All functions return new values; nothing here mutates a date in place.
//! Arithmetic that would leave chrono's representable range saturates to
//! the input date.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Weekday names in grid order (Sunday first).
pub const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift by whole calendar months.
///
/// The day of month is clamped to the target month's length, so Jan 31
/// plus one month is the last day of February, never a day in March.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    shift_days(date, -i64::from(offset))
}

/// First day shown on a Sunday-first month grid: the Sunday on or before
/// the 1st of the month.
pub fn month_grid_start(date: NaiveDate) -> NaiveDate {
    week_start(first_of_month(date))
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Page title for the month containing `date`, e.g. "March 2024".
pub fn format_month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Long US form, e.g. "Friday, March 15, 2024".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Week column label, e.g. "Fri 15/3".
pub fn format_week_header(date: NaiveDate) -> String {
    date.format("%a %-d/%-m").to_string()
}
