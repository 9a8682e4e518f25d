//! Drag-to-select clip editor over a waveform track.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one interactive widget shared by every clipping surface. The host
//! owns the selection signal; this component owns the track markup and the
//! pointer wiring. Gesture math lives in `util::clip_range` and
//! `util::clip_gesture` so it stays testable off the browser.

use leptos::prelude::*;

use crate::util::clip_gesture::{ClipGesture, DragMode};
use crate::util::clip_range::ClipRange;
use crate::util::duration::format_mmss;
use crate::util::waveform;

/// Waveform track with a draggable selection window.
///
/// Three hit regions start a gesture: the left handle resizes the start
/// edge, the right handle the end edge, and the frame interior slides the
/// whole window. Moves, releases, and the pointer leaving the track are
/// handled on the track element itself.
#[component]
pub fn ClipEditor(
    /// Length of the take being clipped, in seconds.
    total_secs: u32,
    /// Selected sub-range, owned by the hosting screen.
    selection: RwSignal<ClipRange>,
    /// Seed for the backing waveform so each take gets its own bars.
    wave_seed: u64,
) -> impl IntoView {
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let gesture = RwSignal::new(ClipGesture::default());

    let begin_drag = move |mode: DragMode, ev: &leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            let percent = track_ref
                .get()
                .and_then(|track| crate::util::clip_input::percent_from_pointer(ev, &track));
            gesture.update(|gesture| {
                selection.update(|range| gesture.begin(mode, percent, range));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (mode, ev);
        }
    };

    let on_start_handle_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        begin_drag(DragMode::ResizeStart, &ev);
    };
    let on_end_handle_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        begin_drag(DragMode::ResizeEnd, &ev);
    };
    let on_frame_down = move |ev: leptos::ev::PointerEvent| {
        begin_drag(DragMode::MoveWindow, &ev);
    };

    let on_track_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            let active = gesture.get_untracked();
            if !active.is_active() {
                return;
            }
            let percent = track_ref
                .get()
                .and_then(|track| crate::util::clip_input::percent_from_pointer(&ev, &track));
            selection.update(|range| active.update(percent, range));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };
    let on_track_release = move |_ev: leptos::ev::PointerEvent| {
        gesture.update(ClipGesture::finish);
    };

    let frame_style = move || {
        let range = selection.get();
        format!("left: {:.4}%; width: {:.4}%", range.start, range.width())
    };
    let start_label = move || {
        let range = selection.get();
        format_mmss((range.start / 100.0 * f64::from(total_secs)).round() as u32)
    };
    let end_label = move || {
        let range = selection.get();
        format_mmss((range.end / 100.0 * f64::from(total_secs)).round() as u32)
    };
    let selected_label = move || {
        let secs = selection.get().selected_secs(total_secs);
        format!("{secs}s selected")
    };

    let bars = waveform::bar_heights(wave_seed, waveform::TRACK_BARS)
        .into_iter()
        .enumerate()
        .map(|(index, height)| {
            let percent = index as f64 / waveform::TRACK_BARS as f64 * 100.0;
            view! {
                <div
                    class="clip-editor__bar"
                    class:clip-editor__bar--selected=move || selection.get().covers(percent)
                    style=format!("height: {height:.0}%")
                ></div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="clip-editor">
            <div
                class="clip-editor__track"
                node_ref=track_ref
                on:pointermove=on_track_move
                on:pointerup=on_track_release
                on:pointercancel=on_track_release
                on:pointerleave=on_track_release
            >
                <div class="clip-editor__bars">{bars}</div>
                <div class="clip-editor__frame" style=frame_style on:pointerdown=on_frame_down>
                    <div
                        class="clip-editor__handle clip-editor__handle--start"
                        on:pointerdown=on_start_handle_down
                    ></div>
                    <div
                        class="clip-editor__handle clip-editor__handle--end"
                        on:pointerdown=on_end_handle_down
                    ></div>
                </div>
            </div>
            <div class="clip-editor__readout">
                <span class="clip-editor__edge">{start_label}</span>
                <span class="clip-editor__selected">{selected_label}</span>
                <span class="clip-editor__edge">{end_label}</span>
            </div>
        </div>
    }
}
