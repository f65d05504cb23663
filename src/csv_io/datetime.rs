//! Consumed-at timestamp handling
//!
//! Accepts ISO 8601 date-times with or without an offset, and formats the
//! Date, Time and Consumed At cells.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};

// `%#z` takes `Z`, `+05`, `+0530` and `+05:30`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO 8601 timestamp, keeping its offset.
/// Timestamps without an offset are placed in `default_offset`.
pub fn parse_consumed_at(value: &str, default_offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    default_offset.from_local_datetime(&naive).single()
}

/// `2024-03-05`
pub fn format_date(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// `7:30 AM`
pub fn format_time(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// `2024-03-05T07:30:00.000-05:00`
pub fn format_iso(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_parse_keeps_offset() {
        let dt = parse_consumed_at("2024-03-05T07:30:00-05:00", utc()).unwrap();
        assert_eq!(format_date(&dt), "2024-03-05");
        assert_eq!(format_time(&dt), "7:30 AM");
        assert_eq!(format_iso(&dt), "2024-03-05T07:30:00.000-05:00");
    }

    #[test]
    fn test_parse_zulu_and_fraction() {
        let dt = parse_consumed_at("2024-03-05T19:05:09.250Z", utc()).unwrap();
        assert_eq!(format_time(&dt), "7:05 PM");
        assert_eq!(format_iso(&dt), "2024-03-05T19:05:09.250+00:00");

        let dt = parse_consumed_at("2024-03-05T07:30Z", utc()).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T07:30:00.000+00:00");

        let dt = parse_consumed_at("2024-03-05T07:30:00+05", utc()).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T07:30:00.000+05:00");
        assert_eq!(format_time(&dt), "7:30 AM");

        let dt = parse_consumed_at("2024-03-05T07:30-0830", utc()).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T07:30:00.000-08:30");

        let dt = parse_consumed_at("2024-03-05T07:30+05:00", utc()).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T07:30:00.000+05:00");
    }

    #[test]
    fn test_parse_offset_without_colon() {
        let dt = parse_consumed_at("2024-03-05T12:00:00+0530", utc()).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T12:00:00.000+05:30");
    }

    #[test]
    fn test_naive_uses_default_offset() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let dt = parse_consumed_at("2024-03-05T00:15", offset).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T00:15:00.000-08:00");
        assert_eq!(format_time(&dt), "12:15 AM");

        let dt = parse_consumed_at("2024-03-05", offset).unwrap();
        assert_eq!(format_iso(&dt), "2024-03-05T00:00:00.000-08:00");
    }

    #[test]
    fn test_invalid_values() {
        for value in ["", "   ", "yesterday", "2024-13-01T00:00:00Z", "03/05/2024"] {
            assert!(parse_consumed_at(value, utc()).is_none(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_same_instant_after_reformat() {
        let original = parse_consumed_at("2024-03-05T07:30:00-05:00", utc()).unwrap();
        let reparsed = parse_consumed_at(&format_iso(&original), utc()).unwrap();
        assert_eq!(original, reparsed);
        assert_eq!(original.timestamp(), reparsed.timestamp());
    }
}
