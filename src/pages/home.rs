//! Landing screen: hero, quick actions, and live library stats.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::PageLayout;
use crate::components::wave_meter::WaveMeter;
use crate::state::library::LibraryState;
use crate::util::waveform;

#[component]
pub fn HomePage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();

    let work_count = move || library.get().works.len();
    let voice_count = move || library.get().voices.len();

    view! {
        <Title text="Songforge" />
        <PageLayout>
            <section class="home-hero">
                <WaveMeter bars=waveform::HERO_BARS seed=waveform::seed_from_str("hero") active=true />
                <h2 class="home-hero__headline">"Make a song in minutes"</h2>
                <p class="home-hero__tagline">
                    "Clone your voice, pick a style, and let the studio compose for you."
                </p>
            </section>

            <section class="home-actions">
                <a href="/create" class="quick-action quick-action--create">
                    <span class="quick-action__glyph">"♫"</span>
                    <span class="quick-action__name">"AI Music"</span>
                    <span class="quick-action__hint">"Compose from a text prompt"</span>
                </a>
                <a href="/voice-clone" class="quick-action quick-action--voice">
                    <span class="quick-action__glyph">"🎙"</span>
                    <span class="quick-action__name">"Voice Clone"</span>
                    <span class="quick-action__hint">"Record a sample, get a model"</span>
                </a>
            </section>

            <section class="home-stats">
                <a href="/works" class="home-stats__cell">
                    <span class="home-stats__value">{work_count}</span>
                    <span class="home-stats__label">"My works"</span>
                </a>
                <a href="/my-voices" class="home-stats__cell">
                    <span class="home-stats__value">{voice_count}</span>
                    <span class="home-stats__label">"My voices"</span>
                </a>
            </section>
        </PageLayout>
    }
}
