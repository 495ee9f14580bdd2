use super::*;

#[test]
fn dot_classes_cover_known_states() {
    assert_eq!(status_dot_class("operational"), "dot--ok");
    assert_eq!(status_dot_class("degraded"), "dot--warn");
    assert_eq!(status_dot_class("outage"), "dot--down");
}

#[test]
fn unknown_states_get_the_fallback_dot() {
    assert_eq!(status_dot_class("maintenance"), "dot--unknown");
    assert_eq!(status_dot_class(""), "dot--unknown");
}

#[test]
fn headlines_match_states() {
    assert_eq!(status_headline("operational"), "All Systems Operational");
    assert_eq!(status_headline("degraded"), "Degraded Performance");
    assert_eq!(status_headline("outage"), "Service Outage");
    assert_eq!(status_headline("???"), "Unknown Status");
}
