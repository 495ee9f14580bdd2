//! Timestamp formatting in IST, the platform's fixed display timezone.
//!
//! DESIGN
//! ======
//! The backend sends RFC 3339 timestamps and plain calendar dates. Everything
//! renders in IST (+05:30) regardless of the viewer's locale; anything empty
//! or unparseable renders as "N/A" rather than erroring mid-table.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 1800;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("IST offset is in range")
}

/// Parse a backend timestamp into IST. Accepts RFC 3339, a bare datetime
/// (taken as UTC), or a bare calendar date (taken as UTC midnight).
fn parse_to_ist(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&ist()));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive).with_timezone(&ist()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(&ist()));
    }
    None
}

fn format_or_na(raw: &str, pattern: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_owned();
    }
    parse_to_ist(raw).map_or_else(|| "N/A".to_owned(), |dt| dt.format(pattern).to_string())
}

/// Full date + time, e.g. `14 Jan 2026, 03:30 pm`.
pub fn format_ist(raw: &str) -> String {
    format_or_na(raw, "%-d %b %Y, %I:%M %P")
}

/// Date only, e.g. `14 Jan 2026`.
pub fn format_date_ist(raw: &str) -> String {
    format_or_na(raw, "%-d %b %Y")
}

/// Time only, e.g. `03:30 pm`.
pub fn format_time_ist(raw: &str) -> String {
    format_or_na(raw, "%I:%M %P")
}

/// Release dates in long form, e.g. `January 14, 2026`.
pub fn format_release_date(raw: &str) -> String {
    format_or_na(raw, "%B %-d, %Y")
}

/// The current wall-clock time in IST, for "last updated" captions.
pub fn now_ist_display() -> String {
    Utc::now().with_timezone(&ist()).format("%-d %b %Y, %I:%M:%S %P").to_string()
}
