//! Publish date parsing and the trailing three month window

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, Utc};

/// Size of the trailing window in calendar months
pub const RECENCY_MONTHS: u32 = 3;

/// Formats tried for dates without an explicit offset, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M",     // nyaa listing, e.g. "2025-07-06 14:49"
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a publish date, `None` when the text is not a recognizable date
pub fn parse_published(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(text) {
        return Some(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NAIVE_DATE_FORMATS.iter().find_map(|format| {
        let date = NaiveDate::parse_from_str(text, format).ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    })
}

/// Oldest publish date still considered relevant at `now`
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(RECENCY_MONTHS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// True when `published` falls inside the trailing window ending at `now`
pub fn is_recent(published: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    published >= window_start(now)
}

/// Parses `text` and keeps it only if it is inside the window
pub fn recent_publish_date(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match parse_published(text) {
        Some(date) if is_recent(date, now) => Some(date),
        Some(date) => {
            tracing::debug!("Dropping release published {} (older than {} months)", date, RECENCY_MONTHS);
            None
        }
        None => {
            tracing::debug!("Dropping release with unparsable date '{}'", text);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_nyaa_format() {
        let date = parse_published("2025-07-06 14:49").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 7, 6, 14, 49, 0).unwrap());
    }

    #[test]
    fn test_parse_other_formats() {
        assert_eq!(
            parse_published("2026-01-16T12:00:00+09:00").unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 16, 3, 0, 0).unwrap()
        );
        assert_eq!(
            parse_published("Tue, 30 Dec 2025 06:22:52 +0000").unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 30, 6, 22, 52).unwrap()
        );
        assert_eq!(
            parse_published("  2026-03-01  ").unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_published("").is_none());
        assert!(parse_published("yesterday").is_none());
        assert!(parse_published("2026-13-40 25:61").is_none());
    }

    #[test]
    fn test_window_boundary() {
        let now = now();
        let too_old = window_start(now) - Duration::days(1);
        assert_eq!(too_old, Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap());
        assert!(!is_recent(too_old, now));

        let two_months = now.checked_sub_months(Months::new(2)).unwrap();
        assert!(is_recent(two_months, now));

        assert!(is_recent(window_start(now), now));
    }

    #[test]
    fn test_recent_publish_date() {
        let now = now();
        assert!(recent_publish_date("2026-10-01 08:30", now).is_some());
        assert!(recent_publish_date("2026-07-15 12:00", now).is_none());
        assert!(recent_publish_date("not a date", now).is_none());
    }
}
