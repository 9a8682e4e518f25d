//! Drag-mode state machine for the clip editor.
//!
//! The editor tracks one gesture at a time between pointer-down and
//! pointer-up/cancel/leave. Each variant of [`DragMode`] names the hit
//! region the gesture began on, which fixes how later pointer positions
//! mutate the selection.

#[cfg(test)]
#[path = "clip_gesture_test.rs"]
mod clip_gesture_test;

use crate::util::clip_range::ClipRange;

/// Which hit region a clip gesture began on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Left handle: pointer position becomes the new start edge.
    ResizeStart,
    /// Right handle: pointer position becomes the new end edge.
    ResizeEnd,
    /// Selection interior: the window slides to center on the pointer,
    /// preserving its width.
    MoveWindow,
}

/// The active drag, if any, between pointer-down and release.
///
/// A `None` percent (track geometry not yet measured) leaves the range
/// untouched, so a half-mounted editor can never corrupt the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipGesture {
    mode: Option<DragMode>,
}

impl ClipGesture {
    pub fn is_active(self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(self) -> Option<DragMode> {
        self.mode
    }

    /// Start tracking a gesture. Resize modes apply one update from the
    /// down position; a window move waits for the first pointer-move.
    pub fn begin(&mut self, mode: DragMode, percent: Option<f64>, range: &mut ClipRange) {
        self.mode = Some(mode);
        if mode == DragMode::MoveWindow {
            return;
        }
        Self::apply(mode, percent, range);
    }

    /// Apply a pointer-move to the range under the active mode. Idle
    /// gestures ignore moves.
    pub fn update(self, percent: Option<f64>, range: &mut ClipRange) {
        if let Some(mode) = self.mode {
            Self::apply(mode, percent, range);
        }
    }

    /// Stop tracking; later moves are ignored until the next `begin`.
    pub fn finish(&mut self) {
        self.mode = None;
    }

    fn apply(mode: DragMode, percent: Option<f64>, range: &mut ClipRange) {
        let Some(percent) = percent else {
            return;
        };
        match mode {
            DragMode::ResizeStart => range.resize_start_to(percent),
            DragMode::ResizeEnd => range.resize_end_to(percent),
            DragMode::MoveWindow => range.move_center_to(percent),
        }
    }
}
