//! Kebab-trigger dropdown for library cards.

use leptos::prelude::*;

/// One row in an [`ActionMenu`].
pub struct MenuEntry {
    pub label: &'static str,
    /// Destructive rows get the warning styling.
    pub danger: bool,
    pub on_select: Callback<()>,
}

/// Small popover menu. A full-viewport backdrop closes it, so taps outside
/// never leak into the card underneath.
#[component]
pub fn ActionMenu(entries: Vec<MenuEntry>) -> impl IntoView {
    let open = RwSignal::new(false);

    let on_trigger = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        open.update(|value| *value = !*value);
    };

    view! {
        <div class="action-menu">
            <button class="action-menu__trigger" title="More actions" on:click=on_trigger>
                "⋯"
            </button>
            {move || {
                if !open.get() {
                    return None;
                }
                let rows = entries
                    .iter()
                    .map(|entry| {
                        let on_select = entry.on_select;
                        let danger = entry.danger;
                        view! {
                            <button
                                class="action-menu__entry"
                                class:action-menu__entry--danger=danger
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    open.set(false);
                                    on_select.run(());
                                }
                            >
                                {entry.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>();
                Some(view! {
                    <button class="action-menu__backdrop" on:click=move |_| open.set(false)></button>
                    <div class="action-menu__list">{rows}</div>
                })
            }}
        </div>
    }
}
