use super::*;

#[test]
fn short_content_passes_through() {
    assert_eq!(preview("hello"), "hello");
}

#[test]
fn long_content_truncates_with_ellipsis() {
    let content = "x".repeat(600);
    let shown = preview(&content);
    assert_eq!(shown.len(), 503);
    assert!(shown.ends_with("..."));
}

#[test]
fn boundary_content_is_untouched() {
    let content = "y".repeat(500);
    assert_eq!(preview(&content), content);
}
