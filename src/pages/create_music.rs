//! Song composer: prompt, optional lyrics, voice and style pickers.
//! Submits a generation task and moves to the preview once it lands.

#[cfg(test)]
#[path = "create_music_test.rs"]
mod create_music_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::PageLayout;
use crate::state::draft::{Mood, MusicStyle, SongDraft, VoiceChoice};
use crate::state::library::LibraryState;
use crate::studio::hub::{TaskHub, TaskId};
#[cfg(feature = "csr")]
use crate::studio::hub::{TaskKind, TaskOutput};

/// Every simulated generation currently lands at the same length.
const GENERATED_SONG_SECS: u32 = 154;

#[component]
pub fn CreateMusicPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<SongDraft>>();
    let library = expect_context::<RwSignal<LibraryState>>();
    let hub = expect_context::<RwSignal<TaskHub>>();

    // Set while our own generation run is in flight.
    let my_task = RwSignal::new(None::<TaskId>);

    let busy = move || my_task.get().is_some();
    let can_submit = move || draft.with(SongDraft::can_generate) && !busy();

    let on_generate = move |_| {
        if busy() || !draft.with_untracked(SongDraft::can_generate) {
            return;
        }
        let title = draft.with_untracked(|d| d.working_title());
        draft.update(|d| d.generated = None);
        #[cfg(feature = "csr")]
        {
            let id = crate::studio::runner::launch(
                hub,
                TaskKind::SongGeneration,
                title.clone(),
                Ok(TaskOutput::SongReady {
                    title,
                    duration_secs: GENERATED_SONG_SECS,
                }),
            );
            my_task.set(Some(id));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (hub, title);
        }
    };

    // Move on once the composer has delivered our piece.
    let navigate = use_navigate();
    Effect::new(move || {
        if my_task.get().is_none() {
            return;
        }
        if draft.with(|d| d.generated.is_some()) {
            my_task.set(None);
            navigate("/create/preview", NavigateOptions::default());
        }
    });

    view! {
        <Title text="Create | Songforge" />
        <PageLayout title="AI Music">
            <section class="compose-block">
                <label class="compose-block__label" for="compose-prompt">"Describe the song"</label>
                <textarea
                    id="compose-prompt"
                    class="compose-block__input"
                    placeholder="A breezy summer track about an old road trip"
                    prop:value=move || draft.with(|d| d.prompt.clone())
                    on:input=move |ev| draft.update(|d| d.prompt = event_target_value(&ev))
                ></textarea>
            </section>

            <section class="compose-block">
                <label class="compose-block__label" for="compose-lyrics">"Lyrics (optional)"</label>
                <textarea
                    id="compose-lyrics"
                    class="compose-block__input compose-block__input--tall"
                    placeholder="Leave empty and the studio writes its own"
                    prop:value=move || draft.with(|d| d.lyrics.clone())
                    on:input=move |ev| draft.update(|d| d.lyrics = event_target_value(&ev))
                ></textarea>
            </section>

            <section class="compose-block">
                <h3 class="compose-block__label">"Voice"</h3>
                <div class="chip-row">
                    {move || {
                        library
                            .with(|lib| voice_options(lib))
                            .into_iter()
                            .map(|(choice, label)| {
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--selected=move || draft.with(|d| d.voice == choice)
                                        on:click=move |_| draft.update(|d| d.voice = choice)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="compose-block">
                <h3 class="compose-block__label">"Style"</h3>
                <div class="style-grid">
                    {MusicStyle::ALL
                        .into_iter()
                        .map(|style| {
                            view! {
                                <button
                                    class="style-cell"
                                    class:style-cell--selected=move || draft.with(|d| d.style == style)
                                    on:click=move |_| draft.update(|d| d.style = style)
                                >
                                    <span class="style-cell__glyph">{style.glyph()}</span>
                                    <span class="style-cell__name">{style.label()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="compose-block">
                <h3 class="compose-block__label">"Mood"</h3>
                <div class="chip-row">
                    {Mood::ALL
                        .into_iter()
                        .map(|mood| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--selected=move || draft.with(|d| d.mood == mood)
                                    on:click=move |_| draft.update(|d| d.mood = mood)
                                >
                                    {mood.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="compose-submit">
                <button
                    class="btn btn--primary btn--wide"
                    disabled=move || !can_submit()
                    on:click=on_generate
                >
                    {move || if busy() { "Composing…" } else { "Generate song" }}
                </button>
                <Show when=busy>
                    <p class="compose-submit__note">"The studio is arranging your track"</p>
                </Show>
            </div>
        </PageLayout>
    }
}

fn voice_options(library: &LibraryState) -> Vec<(VoiceChoice, String)> {
    let mut options = vec![
        (VoiceChoice::DefaultMale, "Default Male".to_string()),
        (VoiceChoice::DefaultFemale, "Default Female".to_string()),
    ];
    for voice in library.ready_voices() {
        options.push((VoiceChoice::Model(voice.id), voice.name.clone()));
    }
    options
}
