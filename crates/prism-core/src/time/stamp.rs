use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `YYYY-MM-DD_HH-MM-SS`; safe to embed in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Formats `at` with [`TIMESTAMP_FORMAT`] in its own time zone.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a file-name-safe timestamp.
pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

/// Whole seconds since the Unix epoch (UTC).
pub fn epoch_seconds() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_date_is_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-07_09-05-02");
    }

    #[test]
    fn now_matches_pattern() {
        let stamp = timestamp_now();
        assert_eq!(stamp.len(), 19);
        for (i, c) in stamp.char_indices() {
            match i {
                4 | 7 | 13 | 16 => assert_eq!(c, '-', "{stamp}"),
                10 => assert_eq!(c, '_', "{stamp}"),
                _ => assert!(c.is_ascii_digit(), "{stamp}"),
            }
        }
    }

    #[test]
    fn epoch_seconds_is_recent() {
        // 2020-09-13T12:26:40Z
        assert!(epoch_seconds() > 1_600_000_000);
    }
}
