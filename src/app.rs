//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::create_music::CreateMusicPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::preview::PreviewPage;
use crate::pages::templates::TemplatesPage;
use crate::pages::voice_clone::VoiceClonePage;
use crate::pages::voices::VoicesPage;
use crate::pages::works::WorksPage;
use crate::state::draft::SongDraft;
use crate::state::library::LibraryState;
use crate::state::ui::ToastQueue;
use crate::studio::apply::apply_finished;
use crate::studio::hub::TaskHub;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let library = RwSignal::new(LibraryState::seeded());
    let hub = RwSignal::new(TaskHub::default());
    let toasts = RwSignal::new(ToastQueue::default());
    let draft = RwSignal::new(SongDraft::default());

    provide_context(library);
    provide_context(hub);
    provide_context(toasts);
    provide_context(draft);

    // Drain finished studio tasks into app state whenever the hub moves.
    Effect::new(move || {
        let pending = hub.with(|h| !h.unacknowledged_finished().is_empty());
        if !pending {
            return;
        }
        #[cfg(feature = "csr")]
        let today = crate::util::clock::today_label();
        #[cfg(not(feature = "csr"))]
        let today = String::new();
        hub.update(|h| {
            library.update(|lib| {
                draft.update(|d| {
                    toasts.update(|t| {
                        apply_finished(h, lib, d, t, &today);
                    });
                });
            });
        });
    });

    view! {
        <Title text="Songforge" />

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("create") view=CreateMusicPage />
                <Route
                    path=(StaticSegment("create"), StaticSegment("preview"))
                    view=PreviewPage
                />
                <Route path=StaticSegment("voice-clone") view=VoiceClonePage />
                <Route path=StaticSegment("templates") view=TemplatesPage />
                <Route path=StaticSegment("works") view=WorksPage />
                <Route path=StaticSegment("my-voices") view=VoicesPage />
            </Routes>
        </Router>
    }
}
