use super::*;

#[test]
fn markdown_headings_and_lists_become_html() {
    let html = render_markdown("## Changes\n- faster sync\n- **bold** fix");
    assert!(html.contains("<h2>Changes</h2>"));
    assert!(html.contains("<li>faster sync</li>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn asset_sizes_render_in_megabytes() {
    assert_eq!(asset_size_mb(1_468_006), "1.4 MB");
    assert_eq!(asset_size_mb(0), "0.0 MB");
    assert_eq!(asset_size_mb(52_428_800), "50.0 MB");
}
