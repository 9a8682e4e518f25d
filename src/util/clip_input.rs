//! Pointer-event geometry helpers for the clip editor.

#[cfg(feature = "csr")]
use crate::util::clip_range::track_percent;

/// Resolve a pointer event against the track element's live bounding box.
///
/// `None` means the track is not measurable yet (zero-width rect), in which
/// case the gesture layer treats the event as a no-op.
#[cfg(feature = "csr")]
pub fn percent_from_pointer(ev: &leptos::ev::PointerEvent, track: &web_sys::HtmlDivElement) -> Option<f64> {
    let rect = track.get_bounding_client_rect();
    track_percent(f64::from(ev.client_x()), rect.left(), rect.width())
}
