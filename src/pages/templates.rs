//! Template gallery: browse styled starting points by category, audition
//! them, and seed the composer with one.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::PageLayout;
use crate::components::wave_meter::WaveMeter;
use crate::state::draft::{MusicStyle, SongDraft};
use crate::state::ui::ToastQueue;
use crate::util::duration::format_mmss;
use crate::util::waveform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateCategory {
    Pop,
    Ancient,
    Electronic,
    Chill,
    Epic,
}

impl TemplateCategory {
    const ALL: [Self; 5] = [Self::Pop, Self::Ancient, Self::Electronic, Self::Chill, Self::Epic];

    fn label(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Ancient => "Ancient",
            Self::Electronic => "Electronic",
            Self::Chill => "Chill",
            Self::Epic => "Epic",
        }
    }
}

struct TemplateDef {
    id: &'static str,
    name: &'static str,
    category: TemplateCategory,
    duration_secs: u32,
    bpm: u32,
    hue: u16,
    style: MusicStyle,
}

const TEMPLATES: &[TemplateDef] = &[
    TemplateDef {
        id: "summer-waves",
        name: "Summer Waves",
        category: TemplateCategory::Chill,
        duration_secs: 165,
        bpm: 92,
        hue: 195,
        style: MusicStyle::Jazz,
    },
    TemplateDef {
        id: "neon-city",
        name: "Neon City",
        category: TemplateCategory::Electronic,
        duration_secs: 192,
        bpm: 128,
        hue: 285,
        style: MusicStyle::Electronic,
    },
    TemplateDef {
        id: "ancient-echoes",
        name: "Ancient Echoes",
        category: TemplateCategory::Ancient,
        duration_secs: 178,
        bpm: 76,
        hue: 30,
        style: MusicStyle::Folk,
    },
    TemplateDef {
        id: "pop-pulse",
        name: "Pop Pulse",
        category: TemplateCategory::Pop,
        duration_secs: 204,
        bpm: 120,
        hue: 330,
        style: MusicStyle::Pop,
    },
    TemplateDef {
        id: "starfield-drift",
        name: "Starfield Drift",
        category: TemplateCategory::Epic,
        duration_secs: 250,
        bpm: 100,
        hue: 255,
        style: MusicStyle::Classical,
    },
    TemplateDef {
        id: "afternoon-coffee",
        name: "Afternoon Coffee",
        category: TemplateCategory::Chill,
        duration_secs: 150,
        bpm: 85,
        hue: 25,
        style: MusicStyle::Jazz,
    },
    TemplateDef {
        id: "rave-circuit",
        name: "Rave Circuit",
        category: TemplateCategory::Electronic,
        duration_secs: 225,
        bpm: 140,
        hue: 300,
        style: MusicStyle::Electronic,
    },
    TemplateDef {
        id: "mountain-brush",
        name: "Mountain Brush",
        category: TemplateCategory::Ancient,
        duration_secs: 200,
        bpm: 68,
        hue: 150,
        style: MusicStyle::Folk,
    },
];

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<SongDraft>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();

    let active_tab = RwSignal::new(None::<TemplateCategory>);
    let playing = RwSignal::new(None::<&'static str>);
    let selected = RwSignal::new(None::<&'static str>);

    let on_use = Callback::new(move |()| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        let Some(template) = template_by_id(id) else {
            return;
        };
        draft.update(|d| d.style = template.style);
        toasts.update(|q| {
            q.success(format!("Template \"{}\" applied", template.name));
        });
        navigate("/create", NavigateOptions::default());
    });

    view! {
        <Title text="Templates | Songforge" />
        <PageLayout title="Templates" show_back=true>
            <div class="tab-row">
                {std::iter::once(None)
                    .chain(TemplateCategory::ALL.into_iter().map(Some))
                    .map(|tab| {
                        let label = tab.map_or("All", TemplateCategory::label);
                        view! {
                            <button
                                class="tab-row__tab"
                                class:tab-row__tab--active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="template-list">
                {move || {
                    filter_templates(active_tab.get())
                        .into_iter()
                        .map(|template| {
                            let id = template.id;
                            let is_playing = move || playing.get() == Some(id);
                            view! {
                                <div
                                    class="template-card"
                                    class:template-card--selected=move || selected.get() == Some(id)
                                    on:click=move |_| {
                                        selected.update(|sel| {
                                            *sel = if *sel == Some(id) { None } else { Some(id) };
                                        });
                                    }
                                >
                                    <div
                                        class="template-card__cover"
                                        style=format!("--cover-hue: {}", template.hue)
                                    >
                                        <Show
                                            when=is_playing
                                            fallback=move || {
                                                view! {
                                                    <span class="template-card__glyph">
                                                        {template.style.glyph()}
                                                    </span>
                                                }
                                            }
                                        >
                                            <WaveMeter
                                                bars=waveform::HERO_BARS
                                                seed=waveform::seed_from_str(id)
                                                active=true
                                            />
                                        </Show>
                                        <button
                                            class="template-card__play"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                playing.update(|now| {
                                                    *now = if *now == Some(id) { None } else { Some(id) };
                                                });
                                            }
                                        >
                                            {move || if is_playing() { "⏸" } else { "▶" }}
                                        </button>
                                    </div>
                                    <div class="template-card__body">
                                        <span class="template-card__name">{template.name}</span>
                                        <span class="template-card__meta">
                                            {format!(
                                                "{} · {} BPM · {}",
                                                template.category.label(),
                                                template.bpm,
                                                format_mmss(template.duration_secs),
                                            )}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || selected.get().is_some()>
                <div class="pick-bar">
                    <span class="pick-bar__name">
                        {move || {
                            selected
                                .get()
                                .and_then(template_by_id)
                                .map(|t| t.name)
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="btn btn--primary" on:click=move |_| on_use.run(())>
                        "Use template"
                    </button>
                </div>
            </Show>
        </PageLayout>
    }
}

fn filter_templates(category: Option<TemplateCategory>) -> Vec<&'static TemplateDef> {
    TEMPLATES.iter().filter(|t| category.is_none_or(|c| t.category == c)).collect()
}

fn template_by_id(id: &str) -> Option<&'static TemplateDef> {
    TEMPLATES.iter().find(|t| t.id == id)
}
