//! Date and time utility functions
//!
//! Due dates are stored either as a bare `YYYY-MM-DD` date or as a full
//! timestamp. A bare date is read as local midnight so it never shifts to
//! the neighbouring day through a UTC conversion; anything else goes through
//! general timestamp parsing. Both forms normalise to the same `YYYY-MM-DD`
//! calendar key for grouping.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Calendar key format used for grouping and for bare due dates
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format used when a due date is too far away for a relative label
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Whether `value` is exactly `dddd-dd-dd`
fn is_bare_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a stored due date into a local date-time.
///
/// # Arguments
/// * `value` - A bare `YYYY-MM-DD` date, an RFC 3339 timestamp, or a naive
///   `YYYY-MM-DDTHH:MM:SS` timestamp (read as local time)
///
/// # Returns
/// * `Option<NaiveDateTime>` - Local date-time, or `None` when missing or unparseable
pub fn parse_date_value(value: Option<&str>) -> Option<NaiveDateTime> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    if is_bare_date(value) {
        return NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a date as its `YYYY-MM-DD` calendar key
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Normalise any stored due date to its calendar key
pub fn normalize_date_string(value: Option<&str>) -> Option<String> {
    parse_date_value(value).map(|dt| to_date_key(dt.date()))
}

pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

/// Whole calendar days from `from` to `target` (negative when `target` is earlier)
pub fn difference_in_days(target: NaiveDateTime, from: NaiveDateTime) -> i64 {
    (target.date() - from.date()).num_days()
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Short relative label for a card's due date.
///
/// Days are counted by rounding the remaining time up: a due time earlier
/// today reads "Today", one later today already reads "Tomorrow", and
/// anything more than a day past reads "Overdue".
///
/// # Arguments
/// * `date_str` - Stored due date
/// * `now` - Current local date-time
///
/// # Returns
/// * `String` - "Overdue", "Today", "Tomorrow", "N days", or the date itself
pub fn format_due_date(date_str: &str, now: NaiveDateTime) -> String {
    let Some(due) = parse_date_value(Some(date_str)) else {
        return date_str.to_string();
    };

    let diff_ms = (due - now).num_milliseconds() as f64;
    let diff_days = (diff_ms / MS_PER_DAY).ceil() as i64;

    match diff_days {
        d if d < 0 => "Overdue".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d <= 7 => format!("{} days", d),
        _ => due.format(DISPLAY_DATE_FORMAT).to_string(),
    }
}

/// Current local date-time without zone information
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Today's calendar key
pub fn today_key() -> String {
    to_date_key(Local::now().date_naive())
}
