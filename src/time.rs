//! Date parsing for date-typed condition values

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a condition value as a calendar date
///
/// Supports:
/// - Dates: "2024-12-31", "2024/12/31"
/// - Compact dates: "20241231"
/// - ISO8601 with timezone: "2024-12-31T23:59:59Z" (the date as written)
/// - ISO8601 without timezone: "2024-12-31T23:59:59"
pub fn parse_date_value(s: &str) -> Option<NaiveDate> {
    // Trim whitespace for better UX
    let s = s.trim();

    if let Some(date) = parse_compact_date(s) {
        return Some(date);
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    None
}

/// `YYYYMMDD`, the form dates take in patent bibliographic data
fn parse_compact_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
