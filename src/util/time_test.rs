use super::*;

#[test]
fn rfc3339_utc_shifts_into_ist() {
    // 10:00 UTC is 15:30 IST the same day.
    assert_eq!(format_ist("2026-01-14T10:00:00Z"), "14 Jan 2026, 03:30 pm");
    assert_eq!(format_time_ist("2026-01-14T10:00:00Z"), "03:30 pm");
}

#[test]
fn late_utc_evening_rolls_to_next_ist_day() {
    // 20:00 UTC is 01:30 IST the next day.
    assert_eq!(format_date_ist("2026-01-14T20:00:00Z"), "15 Jan 2026");
    assert_eq!(format_ist("2026-01-14T20:00:00Z"), "15 Jan 2026, 01:30 am");
}

#[test]
fn offset_timestamps_are_respected() {
    // Already-IST input formats unchanged.
    assert_eq!(format_ist("2026-01-14T09:05:00+05:30"), "14 Jan 2026, 09:05 am");
}

#[test]
fn bare_datetime_is_taken_as_utc() {
    assert_eq!(format_ist("2026-01-14T10:00:00"), "14 Jan 2026, 03:30 pm");
}

#[test]
fn bare_date_formats_as_that_day() {
    // UTC midnight is 05:30 IST, still the same calendar day.
    assert_eq!(format_date_ist("2026-01-10"), "10 Jan 2026");
}

#[test]
fn release_dates_use_long_month_form() {
    assert_eq!(format_release_date("2026-01-05T10:00:00Z"), "January 5, 2026");
}

#[test]
fn empty_and_junk_render_na() {
    assert_eq!(format_ist(""), "N/A");
    assert_eq!(format_date_ist("not a date"), "N/A");
    assert_eq!(format_time_ist("tomorrow"), "N/A");
}
