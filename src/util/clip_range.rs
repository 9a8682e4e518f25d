//! Shared range-selection math for the clip editor track.

#[cfg(test)]
#[path = "clip_range_test.rs"]
mod clip_range_test;

pub const TRACK_MIN_PCT: f64 = 0.0;
pub const TRACK_MAX_PCT: f64 = 100.0;
/// The two selection edges may never close within one percentage point.
pub const MIN_GAP_PCT: f64 = 1.0;

pub const PRESET_START_PCT: f64 = 20.0;
pub const PRESET_END_PCT: f64 = 50.0;

/// Map a horizontal viewport coordinate onto a track of known geometry.
///
/// Returns the position as a percent of track width, clamped to `0..=100`.
/// Unmeasured geometry (zero or negative width, non-finite inputs) yields
/// `None` so callers can treat the event as a no-op.
pub fn track_percent(client_x: f64, track_left: f64, track_width: f64) -> Option<f64> {
    if !client_x.is_finite() || !track_left.is_finite() || !track_width.is_finite() {
        return None;
    }
    if track_width <= 0.0 {
        return None;
    }
    Some(((client_x - track_left) / track_width * 100.0).clamp(TRACK_MIN_PCT, TRACK_MAX_PCT))
}

/// A selected sub-interval of a track, in percent of total length.
///
/// Invariant: `0 <= start`, `end <= 100`, `end - start >= MIN_GAP_PCT`.
/// Every mutation below clamps its input and re-establishes the invariant,
/// so a range that starts valid stays valid across any gesture sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    pub start: f64,
    pub end: f64,
}

impl Default for ClipRange {
    fn default() -> Self {
        Self::preset()
    }
}

impl ClipRange {
    /// The sub-range a freshly opened clip panel starts from.
    pub fn preset() -> Self {
        Self { start: PRESET_START_PCT, end: PRESET_END_PCT }
    }

    pub fn width(self) -> f64 {
        self.end - self.start
    }

    /// Whether a track position (percent) falls inside the selection.
    pub fn covers(self, percent: f64) -> bool {
        percent >= self.start && percent <= self.end
    }

    /// Selection length in whole seconds for a take lasting `total_secs`.
    pub fn selected_secs(self, total_secs: u32) -> u32 {
        (self.width() / 100.0 * f64::from(total_secs)).round() as u32
    }

    /// Drag the left edge toward `percent`, stopping `MIN_GAP_PCT` short of
    /// the right edge.
    pub fn resize_start_to(&mut self, percent: f64) {
        let percent = percent.clamp(TRACK_MIN_PCT, TRACK_MAX_PCT);
        self.start = percent.min(self.end - MIN_GAP_PCT);
    }

    /// Drag the right edge toward `percent`, stopping `MIN_GAP_PCT` short of
    /// the left edge.
    pub fn resize_end_to(&mut self, percent: f64) {
        let percent = percent.clamp(TRACK_MIN_PCT, TRACK_MAX_PCT);
        self.end = percent.max(self.start + MIN_GAP_PCT);
    }

    /// Slide the whole window so it centers on `percent`, preserving width
    /// and pinning to the track ends.
    pub fn move_center_to(&mut self, percent: f64) {
        let percent = percent.clamp(TRACK_MIN_PCT, TRACK_MAX_PCT);
        let width = self.width();
        let new_start = (percent - width / 2.0).clamp(TRACK_MIN_PCT, TRACK_MAX_PCT - width);
        self.start = new_start;
        self.end = new_start + width;
    }
}
