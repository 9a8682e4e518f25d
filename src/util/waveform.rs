//! Deterministic waveform bar heights.
//!
//! Wave strips appear on several screens (hero, cards, the clip track).
//! Heights are derived from a seed instead of sampled randomness so a strip
//! renders identically on every reactive re-run and can be asserted in
//! tests.

#[cfg(test)]
#[path = "waveform_test.rs"]
mod waveform_test;

pub const BAR_MIN_PCT: f64 = 20.0;
pub const BAR_MAX_PCT: f64 = 95.0;

/// Bar counts used by the widgets that render strips.
pub const HERO_BARS: usize = 12;
pub const CARD_BARS: usize = 40;
pub const TRACK_BARS: usize = 100;

/// Derive a stable seed from an id or title.
pub fn seed_from_str(s: &str) -> u64 {
    // FNV-1a, good enough to de-correlate neighboring ids.
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    for byte in s.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Height of one bar, in percent of the strip height.
pub fn bar_height(seed: u64, index: usize) -> f64 {
    let mixed = mix(seed ^ (index as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    let unit = (mixed >> 11) as f64 / (1_u64 << 53) as f64;
    BAR_MIN_PCT + unit * (BAR_MAX_PCT - BAR_MIN_PCT)
}

/// All bar heights for a strip of `count` bars.
pub fn bar_heights(seed: u64, count: usize) -> Vec<f64> {
    (0..count).map(|index| bar_height(seed, index)).collect()
}

// splitmix64 finalizer.
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
