//! Voice clone screen: record a reading sample, then hand it to the
//! training queue under a user-chosen name.

#[cfg(test)]
#[path = "voice_clone_test.rs"]
mod voice_clone_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::Title;
use uuid::Uuid;

use crate::components::layout::PageLayout;
use crate::state::library::{LibraryState, VoiceModel, VoiceStatus};
use crate::state::ui::ToastQueue;
use crate::studio::hub::TaskHub;
#[cfg(feature = "csr")]
use crate::studio::hub::{TaskKind, TaskOutput};
#[cfg(feature = "csr")]
use crate::util::duration::record_at_limit;
use crate::util::duration::{RECORD_LIMIT_SECS, RECORD_TARGET_SECS, format_mmss, record_progress_pct};

const SAMPLE_PASSAGE: &str = "Read this aloud, at your normal pace: \
Every song starts as a small idea. Give the studio a minute of your \
natural voice and it will learn your tone, your pauses, and the way \
you land on a phrase. Speak clearly, stay close to the microphone, \
and let the words flow the way you would tell a friend a story.";

#[component]
pub fn VoiceClonePage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let hub = expect_context::<RwSignal<TaskHub>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let recording = RwSignal::new(false);
    let elapsed = RwSignal::new(0u32);
    let has_take = RwSignal::new(false);
    let show_save = RwSignal::new(false);
    let take_name = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);

    // One flag per ticker run; dropping it to false ends the loop.
    let ticker = RwSignal::new(None::<Arc<AtomicBool>>);

    let stop_ticker = move || {
        if let Some(alive) = ticker.get_untracked() {
            alive.store(false, Ordering::Relaxed);
        }
        ticker.set(None);
    };

    let on_record = move |_| {
        if recording.get_untracked() {
            return;
        }
        elapsed.set(0);
        has_take.set(false);
        recording.set(true);
        #[cfg(feature = "csr")]
        {
            let alive = Arc::new(AtomicBool::new(true));
            ticker.set(Some(alive.clone()));
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    let secs = elapsed.get_untracked() + 1;
                    elapsed.set(secs);
                    if record_at_limit(secs) {
                        alive.store(false, Ordering::Relaxed);
                        recording.set(false);
                        has_take.set(true);
                        break;
                    }
                }
            });
        }
    };

    let on_stop = move |_| {
        if !recording.get_untracked() {
            return;
        }
        stop_ticker();
        recording.set(false);
        if take_is_saveable(elapsed.get_untracked()) {
            has_take.set(true);
            show_save.set(true);
        } else {
            elapsed.set(0);
        }
    };

    let on_rerecord = move |_| {
        stop_ticker();
        recording.set(false);
        has_take.set(false);
        elapsed.set(0);
    };

    let close_save = Callback::new(move |()| {
        show_save.set(false);
        take_name.set(String::new());
        name_error.set(None);
    });

    let on_save = Callback::new(move |()| {
        let name = match validate_voice_name(&take_name.get_untracked()) {
            Ok(name) => name,
            Err(message) => {
                name_error.set(Some(message));
                return;
            }
        };
        let voice_id = Uuid::new_v4();
        library.update(|lib| {
            lib.add_voice(VoiceModel {
                id: voice_id,
                name: name.clone(),
                status: VoiceStatus::Processing,
                sample_secs: elapsed.get_untracked(),
            });
        });
        #[cfg(feature = "csr")]
        {
            crate::studio::runner::launch(
                hub,
                TaskKind::VoiceTraining,
                name.clone(),
                Ok(TaskOutput::VoiceReady { voice_id }),
            );
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = hub;
        }
        toasts.update(|t| {
            t.info(format!("Voice saved. Training \"{name}\" now"));
        });
        has_take.set(false);
        elapsed.set(0);
        close_save.run(());
    });

    on_cleanup(stop_ticker);

    let timer_label = move || format_mmss(elapsed.get());
    let progress_style = move || format!("width: {}%", record_progress_pct(elapsed.get()));

    view! {
        <Title text="Voice Clone | Songforge" />
        <PageLayout
            title="Voice Clone"
            action=|| {
                view! {
                    <a href="/my-voices" class="app-header__link">"🔊"</a>
                }
            }
        >
            <section class="passage-card">
                <h3 class="passage-card__title">"Sample passage"</h3>
                <p class="passage-card__text">{SAMPLE_PASSAGE}</p>
            </section>

            <section class="recorder">
                <Show
                    when=move || recording.get()
                    fallback=move || {
                        view! {
                            <button class="recorder__mic" on:click=on_record>
                                <span class="recorder__mic-glyph">"🎙"</span>
                            </button>
                            <p class="recorder__hint">
                                {move || {
                                    if has_take.get() { "Take ready" } else { "Tap to start recording" }
                                }}
                            </p>
                        }
                    }
                >
                    <button class="recorder__mic recorder__mic--live" on:click=on_stop>
                        <span class="recorder__mic-glyph">"⏹"</span>
                    </button>
                    <p class="recorder__hint">"Recording… tap to stop"</p>
                </Show>

                <div class="recorder__timer">{timer_label}</div>
                <div class="recorder__track">
                    <div class="recorder__fill" style=progress_style></div>
                </div>
                <p class="recorder__target">
                    {format!(
                        "Aim for {} · stops at {}",
                        format_mmss(RECORD_TARGET_SECS),
                        format_mmss(RECORD_LIMIT_SECS),
                    )}
                </p>

                <Show when=move || has_take.get() && !recording.get()>
                    <div class="recorder__actions">
                        <button class="btn" on:click=on_rerecord>"Re-record"</button>
                        <button class="btn btn--primary" on:click=move |_| show_save.set(true)>
                            "Save voice"
                        </button>
                    </div>
                </Show>
            </section>

            <Show when=move || show_save.get()>
                <SaveVoiceDialog
                    name=take_name
                    error=name_error
                    sample_secs=elapsed
                    on_cancel=close_save
                    on_save=on_save
                />
            </Show>
        </PageLayout>
    }
}

#[component]
fn SaveVoiceDialog(
    name: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    sample_secs: RwSignal<u32>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h3 class="dialog__title">"Name this voice"</h3>
                <p class="dialog__note">
                    {move || format!("{} sample recorded", format_mmss(sample_secs.get()))}
                </p>
                <label class="dialog__label">
                    "Voice name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Studio Voice"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            error.set(None);
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_save.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Discard"</button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Start training"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Takes under a second carry no usable audio.
fn take_is_saveable(elapsed_secs: u32) -> bool {
    elapsed_secs >= 1
}

fn validate_voice_name(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Give the voice a name");
    }
    if trimmed.chars().count() > 40 {
        return Err("Keep the name under 40 characters");
    }
    Ok(trimmed.to_string())
}
