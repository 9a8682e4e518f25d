//! Animated waveform bar strip.

use leptos::prelude::*;

use crate::util::waveform;

/// A strip of `bars` bars with seeded heights. While `active`, the bars
/// pulse; otherwise they hold their resting height.
#[component]
pub fn WaveMeter(bars: usize, seed: u64, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let bar_views = waveform::bar_heights(seed, bars)
        .into_iter()
        .enumerate()
        .map(|(index, height)| {
            let delay_ms = index * 90;
            view! {
                <div
                    class="wave-meter__bar"
                    style=format!("height: {height:.0}%; animation-delay: {delay_ms}ms")
                ></div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="wave-meter" class:wave-meter--active=move || active.get()>
            {bar_views}
        </div>
    }
}
