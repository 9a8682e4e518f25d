//! Works library: everything the studio has produced, with playback,
//! sharing, and housekeeping per entry.

#[cfg(test)]
#[path = "works_test.rs"]
mod works_test;

use leptos::prelude::*;
use leptos_meta::Title;
use uuid::Uuid;

use crate::components::action_menu::{ActionMenu, MenuEntry};
use crate::components::layout::PageLayout;
use crate::components::wave_meter::WaveMeter;
use crate::state::library::{LibraryState, Work};
use crate::state::ui::ToastQueue;
use crate::util::duration::format_mmss;
use crate::util::waveform;

#[component]
pub fn WorksPage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let playing = RwSignal::new(None::<Uuid>);

    let stats_line = move || {
        library.with(|lib| {
            format!("{} works · {} total", lib.works.len(), format_mmss(lib.total_work_secs()))
        })
    };

    view! {
        <Title text="My Works | Songforge" />
        <PageLayout title="My Works" show_back=true>
            <p class="library-stats">{stats_line}</p>

            <Show when=move || library.with(|lib| lib.works.is_empty())>
                <div class="empty-state">
                    <span class="empty-state__glyph">"♪"</span>
                    <p class="empty-state__text">"Nothing here yet"</p>
                    <a href="/create" class="btn btn--primary">"Create your first song"</a>
                </div>
            </Show>

            <div class="work-list">
                {move || {
                    library
                        .with(|lib| lib.works.clone())
                        .into_iter()
                        .map(|work| view! { <WorkCard work=work playing=playing /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </PageLayout>
    }
}

#[component]
fn WorkCard(work: Work, playing: RwSignal<Option<Uuid>>) -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let work_id = work.id;
    let seed = waveform::seed_from_str(&work.title);
    let is_playing = move || playing.get() == Some(work_id);

    let share = {
        let payload = share_payload(&work);
        Callback::new(move |()| {
            #[cfg(feature = "csr")]
            {
                copy_share_text(payload.clone(), toasts);
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &payload;
            }
        })
    };
    let entries = vec![
        MenuEntry {
            label: "Make a vlog",
            danger: false,
            on_select: Callback::new(move |()| {
                toasts.update(|t| {
                    t.info("Vlog export is on the roadmap");
                });
            }),
        },
        MenuEntry { label: "Copy share info", danger: false, on_select: share },
        MenuEntry {
            label: "Delete",
            danger: true,
            on_select: Callback::new(move |()| {
                let removed = library.try_update(|lib| lib.remove_work(work_id)).flatten();
                if let Some(gone) = removed {
                    playing.update(|now| {
                        if *now == Some(work_id) {
                            *now = None;
                        }
                    });
                    toasts.update(|t| {
                        t.info(format!("Deleted \"{}\"", gone.title));
                    });
                }
            }),
        },
    ];

    view! {
        <div class="work-card">
            <div class=format!("work-card__cover work-card__cover--{}", work.kind.css_modifier())>
                <Show
                    when=is_playing
                    fallback=|| {
                        view! { <span class="work-card__glyph">"♪"</span> }
                    }
                >
                    <WaveMeter bars=waveform::HERO_BARS seed=seed active=true />
                </Show>
                <button
                    class="work-card__play"
                    on:click=move |_| {
                        playing.update(|now| {
                            *now = if *now == Some(work_id) { None } else { Some(work_id) };
                        });
                    }
                >
                    {move || if is_playing() { "⏸" } else { "▶" }}
                </button>
            </div>
            <div class="work-card__body">
                <span class="work-card__name">{work.title.clone()}</span>
                <span class=format!("work-card__badge work-card__badge--{}", work.kind.css_modifier())>
                    {work.kind.label()}
                </span>
                <span class="work-card__meta">
                    {format!("{} · {}", format_mmss(work.duration_secs), work.created_on)}
                </span>
            </div>
            <ActionMenu entries=entries />
        </div>
    }
}

/// Text handed to the clipboard when a work is shared.
fn share_payload(work: &Work) -> String {
    serde_json::json!({
        "app": "songforge",
        "title": work.title,
        "kind": work.kind.label(),
        "duration_secs": work.duration_secs,
        "created_on": work.created_on,
    })
    .to_string()
}

#[cfg(feature = "csr")]
fn copy_share_text(text: String, toasts: RwSignal<ToastQueue>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    leptos::task::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => {
                toasts.update(|t| {
                    t.success("Share info copied");
                });
            }
            Err(err) => {
                leptos::logging::warn!("clipboard write failed: {err:?}");
                toasts.update(|t| {
                    t.error("Could not reach the clipboard");
                });
            }
        }
    });
}
