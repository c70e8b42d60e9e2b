//! Start date extraction for a single event record.

use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// `DTSTART`, optional parameters, then an 8-digit date with an optional
/// `T`-prefixed time part that is ignored.
static DTSTART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*DTSTART(?:;[^:\r\n]*)?:(\d{8})(?:T\d*)?")
        .expect("DTSTART pattern is valid")
});

/// Extract the calendar date an event starts on.
///
/// Handles the usual shapes:
/// - `DTSTART;VALUE=DATE:20240101`
/// - `DTSTART:20240101T100000Z`
/// - `DTSTART;TZID=America/New_York:20240101T100000`
///
/// The date is taken as written, without any timezone conversion. A record
/// without a `DTSTART` line, or with an impossible date, gets
/// `NaiveDate::MIN` so that any realistic window excludes it.
pub fn extract_date(record: &str) -> NaiveDate {
    let Some(caps) = DTSTART_RE.captures(record) else {
        return NaiveDate::MIN;
    };

    let digits = &caps[1];
    NaiveDate::parse_from_str(digits, "%Y%m%d").unwrap_or_else(|e| {
        debug!("unparsable DTSTART date '{digits}': {e}");
        NaiveDate::MIN
    })
}
