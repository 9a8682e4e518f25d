//! Duration formatting and recording-progress math.

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;

/// Recommended voice sample length; the progress ring fills at this mark.
pub const RECORD_TARGET_SECS: u32 = 60;
/// Hard ceiling after which a take stops on its own.
pub const RECORD_LIMIT_SECS: u32 = 120;

/// Render whole seconds as `m:ss`.
pub fn format_mmss(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes}:{seconds:02}")
}

/// Progress toward the recommended sample length, capped at 100.
pub fn record_progress_pct(elapsed_secs: u32) -> u32 {
    (f64::from(elapsed_secs) / f64::from(RECORD_TARGET_SECS) * 100.0).round().min(100.0) as u32
}

/// Whether a take has hit the hard ceiling and must stop.
pub fn record_at_limit(elapsed_secs: u32) -> bool {
    elapsed_secs >= RECORD_LIMIT_SECS
}

/// Sum a list of durations, as displayed in library stat headers.
pub fn total_secs<I: IntoIterator<Item = u32>>(durations: I) -> u32 {
    durations.into_iter().sum()
}
