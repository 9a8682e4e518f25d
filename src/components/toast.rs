//! Toast host: renders the queued notifications and times them out.

use leptos::prelude::*;

use crate::state::ui::ToastQueue;

/// Fixed stack above the bottom navigation. Each toast dismisses itself
/// after `TOAST_DISMISS_MS`, or immediately on tap.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    #[cfg(feature = "csr")]
    {
        use crate::state::ui::TOAST_DISMISS_MS;

        // Watermark of ids whose expiry is already scheduled, so reruns of
        // the effect never double-schedule a dismissal.
        let scheduled = RwSignal::new(0_u64);
        Effect::new(move || {
            let fresh: Vec<u64> = toasts.with(|queue| {
                queue
                    .notes()
                    .iter()
                    .map(|note| note.id)
                    .filter(|id| *id > scheduled.get_untracked())
                    .collect()
            });
            for id in fresh {
                scheduled.set(id);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        TOAST_DISMISS_MS,
                    )))
                    .await;
                    toasts.update(|queue| queue.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .notes()
                    .iter()
                    .map(|note| {
                        let id = note.id;
                        view! {
                            <button
                                class=format!("toast toast--{}", note.kind.css_modifier())
                                on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                            >
                                {note.message.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
