//! FILETIME timestamps.
//!
//! Everything reports modification dates as Windows FILETIME values: the
//! number of 100-nanosecond ticks since 1601-01-01 UTC, sent as decimal text.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

const TICKS_PER_MILLISECOND: i64 = 10_000;

/// Milliseconds between 1601-01-01 and 1970-01-01.
const FILETIME_EPOCH_OFFSET_MS: i64 = 11_644_473_600_000;

/// 1980-02-01T00:00:00Z, which Everything reports for files with no known date.
const UNKNOWN_DATE_MS: i64 = 318_211_200_000;

/// en-US style, e.g. `1/15/2024, 10:30:00 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const NO_DATE: &str = "No date";
pub const INVALID_DATE: &str = "Invalid date";

/// Convert FILETIME ticks to a UTC timestamp, truncated to milliseconds.
pub fn filetime_to_utc(ticks: i64) -> Option<DateTime<Utc>> {
    let millis = (ticks / TICKS_PER_MILLISECOND).checked_sub(FILETIME_EPOCH_OFFSET_MS)?;
    DateTime::from_timestamp_millis(millis)
}

/// Format a FILETIME value in the local time zone.
pub fn format_filetime(raw: Option<&str>) -> String {
    format_filetime_in(raw, &Local)
}

/// Format a FILETIME value in `tz`.
///
/// Empty, `0`, missing, and the 1980-02-01 placeholder render as `No date`.
/// Anything that is not a representable tick count renders as `Invalid date`.
pub fn format_filetime_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("0") => return NO_DATE.to_string(),
        Some(raw) => raw,
    };

    match raw.parse::<i64>().ok().and_then(filetime_to_utc) {
        Some(date) if date.timestamp_millis() == UNKNOWN_DATE_MS => NO_DATE.to_string(),
        Some(date) => date.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::warn!(raw = %raw, "could not convert FILETIME value");
            INVALID_DATE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    /// 2024-01-15T10:30:00Z
    const JAN_15_2024: &str = "133497882000000000";

    /// 1980-02-01T00:00:00Z
    const UNKNOWN_DATE_TICKS: &str = "119626848000000000";

    #[test]
    fn test_filetime_to_utc() {
        let date = filetime_to_utc(133_497_882_000_000_000).unwrap();
        assert_eq!(date.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let epoch = filetime_to_utc(116_444_736_000_000_000).unwrap();
        assert_eq!(epoch.timestamp_millis(), 0);
    }

    #[test]
    fn test_truncates_sub_millisecond_ticks() {
        let date = filetime_to_utc(133_497_882_000_009_999).unwrap();
        assert_eq!(date.timestamp_millis(), 1_705_314_600_000);
    }

    #[test]
    fn test_format_utc() {
        assert_eq!(format_filetime_in(Some(JAN_15_2024), &Utc), "1/15/2024, 10:30:00 AM");
    }

    #[test]
    fn test_format_other_zone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_filetime_in(Some(JAN_15_2024), &tz), "1/15/2024, 7:30:00 PM");
    }

    #[test]
    fn test_no_date_values() {
        assert_eq!(format_filetime_in(None, &Utc), "No date");
        assert_eq!(format_filetime_in(Some(""), &Utc), "No date");
        assert_eq!(format_filetime_in(Some("0"), &Utc), "No date");
    }

    #[test]
    fn test_unknown_date_placeholder() {
        assert_eq!(format_filetime_in(Some(UNKNOWN_DATE_TICKS), &Utc), "No date");
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_filetime_in(Some(UNKNOWN_DATE_TICKS), &tz), "No date");
    }

    #[test]
    fn test_one_millisecond_after_placeholder_is_a_date() {
        assert_eq!(format_filetime_in(Some("119626848000010000"), &Utc), "2/1/1980, 12:00:00 AM");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(format_filetime_in(Some("yesterday"), &Utc), "Invalid date");
        assert_eq!(format_filetime_in(Some("1.5e17"), &Utc), "Invalid date");
        assert_eq!(format_filetime_in(Some("99999999999999999999"), &Utc), "Invalid date");
    }

    #[test]
    fn test_local_matches_explicit_zone() {
        assert_eq!(format_filetime(Some(JAN_15_2024)), format_filetime_in(Some(JAN_15_2024), &Local));
    }
}
