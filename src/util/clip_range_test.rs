use super::*;

#[test]
fn track_percent_maps_linearly_inside_the_track() {
    assert_eq!(track_percent(100.0, 0.0, 200.0), Some(50.0));
    assert_eq!(track_percent(150.0, 0.0, 200.0), Some(75.0));
    assert_eq!(track_percent(40.0, 40.0, 160.0), Some(0.0));
}

#[test]
fn track_percent_clamps_outside_the_track() {
    assert_eq!(track_percent(-50.0, 0.0, 200.0), Some(0.0));
    assert_eq!(track_percent(999.0, 0.0, 200.0), Some(100.0));
}

#[test]
fn track_percent_rejects_unmeasured_geometry() {
    assert_eq!(track_percent(10.0, 0.0, 0.0), None);
    assert_eq!(track_percent(10.0, 0.0, -4.0), None);
    assert_eq!(track_percent(f64::NAN, 0.0, 200.0), None);
    assert_eq!(track_percent(10.0, 0.0, f64::INFINITY), None);
}

#[test]
fn preset_range_is_valid_and_default() {
    let range = ClipRange::preset();
    assert_eq!(range.start, PRESET_START_PCT);
    assert_eq!(range.end, PRESET_END_PCT);
    assert_eq!(ClipRange::default(), range);
    assert!(range.width() >= MIN_GAP_PCT);
}

#[test]
fn resize_start_follows_the_pointer_until_the_gap() {
    let mut range = ClipRange::preset();
    range.resize_start_to(35.0);
    assert_eq!(range.start, 35.0);
    assert_eq!(range.end, 50.0);

    range.resize_start_to(99.0);
    assert_eq!(range.start, 49.0);
    assert_eq!(range.end, 50.0);
}

#[test]
fn resize_end_clamps_to_one_point_past_start() {
    let mut range = ClipRange { start: 20.0, end: 50.0 };
    range.resize_end_to(10.0);
    assert_eq!(range.end, 21.0);
    assert_eq!(range.start, 20.0);
}

#[test]
fn resize_edges_never_leave_the_track() {
    let mut range = ClipRange::preset();
    range.resize_start_to(-40.0);
    assert_eq!(range.start, 0.0);
    range.resize_end_to(400.0);
    assert_eq!(range.end, 100.0);
}

#[test]
fn move_scenario_from_pointer_at_150px_of_200px_track() {
    let percent = track_percent(150.0, 0.0, 200.0).unwrap();
    let mut range = ClipRange { start: 20.0, end: 50.0 };
    range.move_center_to(percent);
    assert_eq!(range.start, 60.0);
    assert_eq!(range.end, 90.0);
    assert!((range.width() - 30.0).abs() < 1e-9);
}

#[test]
fn move_pins_the_window_at_both_track_ends() {
    let mut range = ClipRange { start: 20.0, end: 50.0 };
    range.move_center_to(0.0);
    assert_eq!(range.start, 0.0);
    assert_eq!(range.end, 30.0);

    range.move_center_to(100.0);
    assert_eq!(range.start, 70.0);
    assert_eq!(range.end, 100.0);
}

#[test]
fn move_preserves_width_across_many_consecutive_moves() {
    let mut range = ClipRange { start: 12.5, end: 47.25 };
    let width = range.width();
    let mut position = 3.0_f64;
    for step in 0..500 {
        position = (position * 7.31 + f64::from(step) * 0.173).rem_euclid(100.0);
        range.move_center_to(position);
        assert!((range.width() - width).abs() < 1e-9);
    }
}

#[test]
fn invariant_holds_across_mixed_gesture_sequences() {
    let mut range = ClipRange::preset();
    let mut value = 0.42_f64;
    for step in 0..600 {
        value = (value * 31.7 + 0.137).rem_euclid(140.0) - 20.0;
        match step % 3 {
            0 => range.resize_start_to(value),
            1 => range.resize_end_to(value),
            _ => range.move_center_to(value),
        }
        assert!(range.start >= TRACK_MIN_PCT);
        assert!(range.end <= TRACK_MAX_PCT);
        assert!(range.end - range.start >= MIN_GAP_PCT - 1e-9);
    }
}

#[test]
fn covers_tracks_both_edges_inclusively() {
    let range = ClipRange { start: 20.0, end: 50.0 };
    assert!(range.covers(20.0));
    assert!(range.covers(35.0));
    assert!(range.covers(50.0));
    assert!(!range.covers(19.9));
    assert!(!range.covers(50.1));
}

#[test]
fn selected_secs_rounds_the_mapped_duration() {
    let range = ClipRange { start: 20.0, end: 50.0 };
    assert_eq!(range.selected_secs(154), 46);
    let full = ClipRange { start: 0.0, end: 100.0 };
    assert_eq!(full.selected_secs(154), 154);
    let sliver = ClipRange { start: 0.0, end: 1.0 };
    assert_eq!(sliver.selected_secs(154), 2);
}
