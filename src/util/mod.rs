//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate gesture math and environment concerns from view
//! code so the interactive behavior stays testable on the native target.

pub mod clip_gesture;
pub mod clip_input;
pub mod clip_range;
pub mod clock;
pub mod duration;
pub mod waveform;
