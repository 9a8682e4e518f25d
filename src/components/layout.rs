//! Shared page chrome: header, scrollable main area, bottom navigation.

use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::components::header::AppHeader;
use crate::components::nav::MobileNav;
use crate::components::toast::ToastHost;

/// Standard mobile screen shell. Full-screen flows (the preview sheet)
/// pass `hide_nav=true` to reclaim the tab bar's space.
#[component]
pub fn PageLayout(
    #[prop(optional, into)] title: String,
    #[prop(optional)] show_back: bool,
    #[prop(optional)] hide_nav: bool,
    #[prop(optional, into)] action: ViewFn,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-shell" class:app-shell--bare=hide_nav>
            <AppHeader title=title show_back=show_back action=action />
            <main class="app-shell__main">{children()}</main>
            <Show when=move || !hide_nav>
                <MobileNav />
            </Show>
            <ToastHost />
        </div>
    }
}
