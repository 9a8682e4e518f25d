//! Fallback screen for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::layout::PageLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        leptos::logging::warn!("no route for {}", pathname.get());
    });

    view! {
        <Title text="Not Found | Songforge" />
        <PageLayout title="Not Found">
            <div class="empty-state">
                <span class="empty-state__glyph">"?"</span>
                <p class="empty-state__text">"This page does not exist"</p>
                <a href="/" class="btn btn--primary">"Back home"</a>
            </div>
        </PageLayout>
    }
}
