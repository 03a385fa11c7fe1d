//! Date Normalization
//!
//! Every date comparison happens on calendar days. An item's day is the UTC
//! date of its creation timestamp; filter bounds are date-only already.

use chrono::{DateTime, NaiveDate, Utc};

/// Calendar day (UTC) of a timestamp
pub fn day_of(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Parse user date input into a calendar day.
///
/// Accepts `YYYY-MM-DD` (what `<input type="date">` produces) or a full
/// RFC 3339 timestamp. Anything else, including the empty string, is `None`.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|ts| day_of(&ts.with_timezone(&Utc)))
}

/// Format a day the way date inputs expect it
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
