//! Preview screen for a freshly generated piece: listen, save it to the
//! works library, or cut a clip out of it.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::components::clip_editor::ClipEditor;
use crate::components::layout::PageLayout;
use crate::components::wave_meter::WaveMeter;
use crate::state::draft::SongDraft;
use crate::state::library::{LibraryState, Work, WorkKind};
use crate::state::ui::ToastQueue;
use crate::studio::hub::{TaskHub, TaskKind};
#[cfg(feature = "csr")]
use crate::studio::hub::TaskOutput;
use crate::util::clip_range::ClipRange;
use crate::util::duration::format_mmss;
use crate::util::waveform;

/// The fake player always sits a third of the way into the track.
const PLAYHEAD_PCT: u32 = 35;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<SongDraft>>();
    let library = expect_context::<RwSignal<LibraryState>>();
    let hub = expect_context::<RwSignal<TaskHub>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let piece = Memo::new(move |_| draft.with(|d| d.generated.clone()));

    let playing = RwSignal::new(false);
    let show_saved = RwSignal::new(false);
    let show_clip = RwSignal::new(false);
    let selection = RwSignal::new(ClipRange::preset());

    // Nothing to preview without a generated piece.
    let navigate = use_navigate();
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if piece.get().is_none() {
                navigate("/create", NavigateOptions::default());
            }
        });
    }

    let on_save = move |_| {
        let Some(p) = piece.get_untracked() else {
            return;
        };
        #[cfg(feature = "csr")]
        let created_on = crate::util::clock::today_label();
        #[cfg(not(feature = "csr"))]
        let created_on = String::new();
        library.update(|lib| {
            lib.add_work(Work {
                id: Uuid::new_v4(),
                title: p.title.clone(),
                kind: WorkKind::AiSong,
                duration_secs: p.duration_secs,
                created_on,
            });
        });
        show_saved.set(true);
    };

    let close_saved = Callback::new(move |()| show_saved.set(false));
    let goto_works = Callback::new(move |()| {
        show_saved.set(false);
        navigate("/works", NavigateOptions::default());
    });

    let open_clip = move |_| {
        selection.set(ClipRange::preset());
        show_clip.set(true);
    };
    let cancel_clip = Callback::new(move |()| {
        selection.set(ClipRange::preset());
        show_clip.set(false);
    });

    let clip_busy = Signal::derive(move || hub.with(|h| h.is_running(TaskKind::ClipRender)));
    let confirm_clip = Callback::new(move |()| {
        if clip_busy.get_untracked() {
            return;
        }
        let Some(p) = piece.get_untracked() else {
            return;
        };
        let secs = selection.get_untracked().selected_secs(p.duration_secs);
        #[cfg(feature = "csr")]
        {
            crate::studio::runner::launch(
                hub,
                TaskKind::ClipRender,
                p.title.clone(),
                Ok(TaskOutput::ClipReady {
                    source_title: p.title.clone(),
                    duration_secs: secs,
                }),
            );
        }
        toasts.update(|t| {
            t.info(format!("Rendering a {secs}s clip"));
        });
        show_clip.set(false);
    });

    view! {
        <Title text="Preview | Songforge" />
        <PageLayout title="Preview" show_back=true hide_nav=true>
            {move || {
                let p = piece.get()?;
                let dur = p.duration_secs;
                let seed = waveform::seed_from_str(&p.title);
                Some(view! {
                    <section class="player">
                        <div class="player__cover">
                            <WaveMeter bars=waveform::CARD_BARS seed=seed active=playing />
                        </div>
                        <h2 class="player__title">{p.title.clone()}</h2>
                        <p class="player__meta">{format!("AI Song · {}", format_mmss(dur))}</p>

                        <button
                            class="player__toggle"
                            class:player__toggle--live=move || playing.get()
                            on:click=move |_| playing.update(|on| *on = !*on)
                        >
                            {move || if playing.get() { "⏸" } else { "▶" }}
                        </button>

                        <div class="player__track">
                            <div
                                class="player__fill"
                                style=move || {
                                    let pct = if playing.get() { PLAYHEAD_PCT } else { 0 };
                                    format!("width: {pct}%")
                                }
                            ></div>
                        </div>
                        <div class="player__times">
                            <span>
                                {move || {
                                    let at = if playing.get() { playhead_secs(dur) } else { 0 };
                                    format_mmss(at)
                                }}
                            </span>
                            <span>{format_mmss(dur)}</span>
                        </div>

                        <div class="player__actions">
                            <button class="btn btn--primary btn--wide" on:click=on_save>
                                "Save to works"
                            </button>
                            <button class="btn btn--wide" on:click=open_clip>"Make a clip"</button>
                        </div>
                    </section>
                })
            }}

            {move || {
                if !show_clip.get() {
                    return None;
                }
                let p = piece.get()?;
                Some(view! {
                    <ClipSheet
                        total_secs=p.duration_secs
                        wave_seed=waveform::seed_from_str(&p.title)
                        selection=selection
                        busy=clip_busy
                        on_cancel=cancel_clip
                        on_confirm=confirm_clip
                    />
                })
            }}

            <Show when=move || show_saved.get()>
                <SavedDialog on_stay=close_saved on_works=goto_works />
            </Show>
        </PageLayout>
    }
}

#[component]
fn ClipSheet(
    total_secs: u32,
    wave_seed: u64,
    selection: RwSignal<ClipRange>,
    busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="sheet-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="sheet" on:click=|ev| ev.stop_propagation()>
                <div class="sheet__grip"></div>
                <h3 class="sheet__title">"Select a clip"</h3>
                <ClipEditor total_secs=total_secs selection=selection wave_seed=wave_seed />
                <div class="sheet__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Rendering…" } else { "Save clip" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SavedDialog(on_stay: Callback<()>, on_works: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_stay.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h3 class="dialog__title">"Saved to your works"</h3>
                <p class="dialog__note">"Find it any time under My Works."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_stay.run(())>"Keep listening"</button>
                    <button class="btn btn--primary" on:click=move |_| on_works.run(())>
                        "Open works"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn playhead_secs(total_secs: u32) -> u32 {
    total_secs * PLAYHEAD_PCT / 100
}
