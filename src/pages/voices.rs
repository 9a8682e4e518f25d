//! Voice library: trained models ready to sing, and the ones still in
//! the oven.

#[cfg(test)]
#[path = "voices_test.rs"]
mod voices_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::action_menu::{ActionMenu, MenuEntry};
use crate::components::layout::PageLayout;
use crate::state::draft::{SongDraft, VoiceChoice};
use crate::state::library::{LibraryState, VoiceModel};
use crate::state::ui::ToastQueue;
use crate::util::duration::format_mmss;

#[component]
pub fn VoicesPage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();

    view! {
        <Title text="My Voices | Songforge" />
        <PageLayout title="My Voices" show_back=true>
            <p class="library-stats">{move || library.with(voice_stats_line)}</p>

            <Show when=move || library.with(|lib| lib.voices.is_empty())>
                <div class="empty-state">
                    <span class="empty-state__glyph">"🎙"</span>
                    <p class="empty-state__text">"No voices yet"</p>
                    <a href="/voice-clone" class="btn btn--primary">"Record your first sample"</a>
                </div>
            </Show>

            <Show when=move || library.with(|lib| lib.ready_voice_count() > 0)>
                <h3 class="section-heading">"Ready"</h3>
                <div class="voice-list">
                    {move || {
                        library
                            .with(|lib| lib.ready_voices().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|voice| view! { <ReadyVoiceCard voice=voice /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || {
                library.with(|lib| lib.processing_voices().next().is_some())
            }>
                <h3 class="section-heading">"Training"</h3>
                <div class="voice-list">
                    {move || {
                        library
                            .with(|lib| lib.processing_voices().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|voice| {
                                view! {
                                    <div class="voice-card voice-card--pending">
                                        <span class="voice-card__glyph">"🎙"</span>
                                        <div class="voice-card__body">
                                            <span class="voice-card__name">{voice.name.clone()}</span>
                                            <span class="voice-card__meta">
                                                {format!("{} sample", format_mmss(voice.sample_secs))}
                                            </span>
                                        </div>
                                        <span class="voice-card__badge voice-card__badge--pending">
                                            "Training…"
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </PageLayout>
    }
}

#[component]
fn ReadyVoiceCard(voice: VoiceModel) -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let draft = expect_context::<RwSignal<SongDraft>>();
    let navigate = use_navigate();

    let voice_id = voice.id;
    let entries = vec![
        MenuEntry {
            label: "Compose with this voice",
            danger: false,
            on_select: Callback::new(move |()| {
                draft.update(|d| d.voice = VoiceChoice::Model(voice_id));
                navigate("/create", NavigateOptions::default());
            }),
        },
        MenuEntry {
            label: "Delete",
            danger: true,
            on_select: Callback::new(move |()| {
                let removed = library.try_update(|lib| lib.remove_voice(voice_id)).flatten();
                if let Some(gone) = removed {
                    // A deleted model may have been the draft's pick.
                    draft.update(|d| {
                        if d.voice == VoiceChoice::Model(voice_id) {
                            d.voice = VoiceChoice::default();
                        }
                    });
                    toasts.update(|t| {
                        t.info(format!("Deleted \"{}\"", gone.name));
                    });
                }
            }),
        },
    ];

    view! {
        <div class="voice-card">
            <span class="voice-card__glyph">"🎙"</span>
            <div class="voice-card__body">
                <span class="voice-card__name">{voice.name.clone()}</span>
                <span class="voice-card__meta">
                    {format!("{} sample", format_mmss(voice.sample_secs))}
                </span>
            </div>
            <span class="voice-card__badge voice-card__badge--ready">"Ready"</span>
            <ActionMenu entries=entries />
        </div>
    }
}

fn voice_stats_line(library: &LibraryState) -> String {
    format!("{} ready · {} total", library.ready_voice_count(), library.voices.len())
}
