use super::*;

fn hour(hour: u8, duration: f64) -> HourlyUsage {
    HourlyUsage { hour, duration }
}

#[test]
fn changing_child_resets_page_cursor() {
    let mut filter = SessionFilter::default();
    filter.set_page(4);
    assert_eq!(filter.page(), 4);

    filter.set_child("c7");
    assert_eq!(filter.child(), "c7");
    assert_eq!(filter.page(), 1);
}

#[test]
fn reselecting_same_child_keeps_page() {
    let mut filter = SessionFilter::for_child("c7");
    filter.set_page(3);
    filter.set_child("c7");
    assert_eq!(filter.page(), 3);
}

#[test]
fn page_cursor_clamps_to_one() {
    let mut filter = SessionFilter::default();
    filter.set_page(0);
    assert_eq!(filter.page(), 1);
}

#[test]
fn default_filter_covers_all_children() {
    let filter = SessionFilter::default();
    assert!(filter.is_all());
    assert_eq!(filter.page(), 1);
    assert!(!SessionFilter::for_child("c7").is_all());
}

#[test]
fn peak_hour_picks_maximum_duration() {
    let hours = [hour(9, 5.0), hour(18, 42.0), hour(20, 12.0)];
    assert_eq!(peak_usage_hour(&hours), Some(18));
}

#[test]
fn peak_hour_ties_resolve_to_first_in_order() {
    let hours = [hour(9, 42.0), hour(18, 42.0), hour(20, 12.0)];
    assert_eq!(peak_usage_hour(&hours), Some(9));
}

#[test]
fn peak_hour_of_empty_usage_is_none() {
    assert_eq!(peak_usage_hour(&[]), None);
}

#[test]
fn avg_minutes_rounds_to_whole_minutes() {
    assert_eq!(avg_minutes(7.4), 7);
    assert_eq!(avg_minutes(7.5), 8);
    assert_eq!(avg_minutes(0.0), 0);
}

#[test]
fn showing_caption_matches_middle_page() {
    // child=all&page=2&limit=10 over 25 rows.
    assert_eq!(format_showing(2, 10, 25), "Showing 11 to 20 of 25 results");
    assert!(has_prev(2));
    assert!(has_next(2, 3));
}

#[test]
fn showing_caption_clamps_final_page() {
    assert_eq!(format_showing(3, 10, 25), "Showing 21 to 25 of 25 results");
    assert!(has_prev(3));
    assert!(!has_next(3, 3));
}

#[test]
fn first_page_disables_previous() {
    assert!(!has_prev(1));
}

#[test]
fn pagination_hidden_for_single_page() {
    assert!(!pagination_visible(10, 10));
    assert!(pagination_visible(11, 10));
}
