//! Top app bar with brand or back affordance, title, and an optional
//! right-side action.

use leptos::children::ViewFn;
use leptos::prelude::*;

/// Mobile header, one per screen.
#[component]
pub fn AppHeader(
    /// Screen title; the brand name when left empty.
    #[prop(optional, into)] title: String,
    /// Render a back arrow instead of the brand mark.
    #[prop(optional)] show_back: bool,
    #[prop(optional, into)] action: ViewFn,
) -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    let title = if title.is_empty() { "Songforge".to_owned() } else { title };

    view! {
        <header class="app-header">
            <div class="app-header__lead">
                <Show
                    when=move || show_back
                    fallback=|| view! { <span class="app-header__brand">"♪"</span> }
                >
                    <button class="app-header__back" title="Back" on:click=on_back>
                        "←"
                    </button>
                </Show>
                <h1 class="app-header__title">{title}</h1>
            </div>
            <div class="app-header__action">{action.run()}</div>
        </header>
    }
}
