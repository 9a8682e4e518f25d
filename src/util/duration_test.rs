use super::*;

#[test]
fn format_mmss_zero_pads_seconds() {
    assert_eq!(format_mmss(0), "0:00");
    assert_eq!(format_mmss(7), "0:07");
    assert_eq!(format_mmss(65), "1:05");
    assert_eq!(format_mmss(154), "2:34");
    assert_eq!(format_mmss(605), "10:05");
}

#[test]
fn record_progress_fills_at_the_target_and_caps() {
    assert_eq!(record_progress_pct(0), 0);
    assert_eq!(record_progress_pct(30), 50);
    assert_eq!(record_progress_pct(60), 100);
    assert_eq!(record_progress_pct(90), 100);
}

#[test]
fn record_progress_rounds_to_whole_percent() {
    assert_eq!(record_progress_pct(1), 2);
    assert_eq!(record_progress_pct(40), 67);
}

#[test]
fn record_limit_trips_at_the_ceiling() {
    assert!(!record_at_limit(0));
    assert!(!record_at_limit(119));
    assert!(record_at_limit(RECORD_LIMIT_SECS));
    assert!(record_at_limit(500));
}

#[test]
fn total_secs_sums_library_durations() {
    assert_eq!(total_secs([154, 105, 192, 260]), 711);
    assert_eq!(format_mmss(total_secs([154, 105, 192, 260])), "11:51");
    assert_eq!(total_secs([]), 0);
}
