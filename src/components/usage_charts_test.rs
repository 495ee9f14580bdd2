use super::*;

#[test]
fn polyline_spreads_points_across_width() {
    assert_eq!(
        polyline_points(&[0.0, 5.0, 10.0], 100.0, 100.0),
        "0.0,100.0 50.0,50.0 100.0,0.0"
    );
}

#[test]
fn single_point_centers_horizontally() {
    assert_eq!(polyline_points(&[10.0], 100.0, 100.0), "50.0,0.0");
}

#[test]
fn all_zero_series_sits_on_the_baseline() {
    assert_eq!(
        polyline_points(&[0.0, 0.0], 100.0, 80.0),
        "0.0,80.0 100.0,80.0"
    );
}

#[test]
fn max_scale_floors_at_one() {
    assert_eq!(max_scale(&[]), 1.0);
    assert_eq!(max_scale(&[0.2, 0.4]), 1.0);
    assert_eq!(max_scale(&[3.0, 7.0]), 7.0);
}

#[test]
fn bars_take_seventy_percent_of_their_slot() {
    let (slot, bar) = bar_slot(24, 600.0);
    assert_eq!(slot, 25.0);
    assert_eq!(bar, 17.5);
}

#[test]
fn zero_bars_yields_no_bar_width() {
    let (_, bar) = bar_slot(0, 600.0);
    assert_eq!(bar, 0.0);
}
