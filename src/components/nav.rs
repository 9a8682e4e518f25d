//! Bottom tab bar for the three primary destinations.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

struct NavItem {
    path: &'static str,
    label: &'static str,
    glyph: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home", glyph: "⌂" },
    NavItem { path: "/create", label: "Create", glyph: "♫" },
    NavItem { path: "/voice-clone", label: "Voice", glyph: "🎙" },
];

/// Whether a tab owns the current path. Non-root tabs also own their
/// sub-routes, so `/create/preview` keeps the Create tab lit.
fn nav_item_is_active(pathname: &str, item_path: &str) -> bool {
    if item_path == "/" {
        return pathname == "/";
    }
    pathname == item_path || pathname.starts_with(&format!("{item_path}/"))
}

/// Fixed bottom navigation.
#[component]
pub fn MobileNav() -> impl IntoView {
    let pathname = use_location().pathname;

    let tabs = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            let is_active = move || nav_item_is_active(&pathname.get(), path);
            view! {
                <a href=path class="mobile-nav__item" class:mobile-nav__item--active=is_active>
                    <span class="mobile-nav__glyph">{item.glyph}</span>
                    <span class="mobile-nav__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="mobile-nav">{tabs}</nav> }
}
