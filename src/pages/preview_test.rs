use super::*;

#[test]
fn playhead_sits_a_third_of_the_way_in() {
    assert_eq!(playhead_secs(154), 53);
    assert_eq!(playhead_secs(60), 21);
    assert_eq!(playhead_secs(0), 0);
}

#[test]
fn playhead_never_passes_the_end() {
    for total in [1u32, 30, 154, 600] {
        assert!(playhead_secs(total) < total);
    }
}

#[test]
fn preset_clip_of_the_stock_song_is_46s() {
    let selection = ClipRange::preset();
    assert_eq!(selection.selected_secs(154), 46);
}
