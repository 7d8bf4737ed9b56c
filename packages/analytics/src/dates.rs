//! Display formatting for incident report timestamps.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use crime_stats_analytics_models::DISPLAY_DATE_FORMAT;

/// Format of `DATE_REPORTED` values (`yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`, UTC).
pub const REPORTED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";

/// Re-renders a report timestamp with the chrono strftime `display_format`.
///
/// Returns `input` unchanged if it does not match
/// [`REPORTED_DATE_FORMAT`] or if `display_format` cannot be rendered.
#[must_use]
pub fn format_date(input: &str, display_format: &str) -> String {
    let Ok(parsed) = NaiveDateTime::parse_from_str(input, REPORTED_DATE_FORMAT) else {
        return input.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", parsed.and_utc().format(display_format)).is_err() {
        log::warn!("Unrenderable date format {display_format:?}");
        return input.to_string();
    }
    out
}

/// [`format_date`] with [`DISPLAY_DATE_FORMAT`] (e.g. `"May 17, 2023"`).
#[must_use]
pub fn format_display_date(input: &str) -> String {
    format_date(input, DISPLAY_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_for_display() {
        assert_eq!(
            format_display_date("2023-05-17T14:30:00.000Z"),
            "May 17, 2023"
        );
        assert_eq!(
            format_display_date("2024-01-05T00:00:00.000Z"),
            "Jan 5, 2024"
        );
    }

    #[test]
    fn formats_with_explicit_pattern() {
        assert_eq!(
            format_date("2023-05-17T14:30:00.000Z", "%Y-%m-%d"),
            "2023-05-17"
        );
    }

    #[test]
    fn passes_through_unparsable_input() {
        assert_eq!(format_display_date("not a date"), "not a date");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("05/17/2023"), "05/17/2023");
        assert_eq!(
            format_display_date("2023-05-17T14:30:00Z"),
            "2023-05-17T14:30:00Z"
        );
        assert_eq!(
            format_display_date("2023-05-17T14:30:00.5Z"),
            "2023-05-17T14:30:00.5Z"
        );
        assert_eq!(
            format_display_date("2023-05-17T14:30:00.123456Z"),
            "2023-05-17T14:30:00.123456Z"
        );
        assert_eq!(
            format_display_date("2023-13-40T14:30:00.000Z"),
            "2023-13-40T14:30:00.000Z"
        );
    }

    #[test]
    fn bad_display_pattern_passes_through() {
        assert_eq!(
            format_date("2023-05-17T14:30:00.000Z", "%Q"),
            "2023-05-17T14:30:00.000Z"
        );
    }
}
