use leptos::prelude::*;
use surge_core::{CloseReason, Snackbar as SnackbarState, AUTO_HIDE};

#[component]
pub fn Snackbar(
    #[prop(into)] state: Signal<SnackbarState>,
    on_close: Callback<CloseReason>,
) -> impl IntoView {
    // Bumped per show so a stale timer cannot hide a newer message
    let generation = StoredValue::new(0u64);

    Effect::new(move || {
        let s = state.get();
        if !s.open {
            return;
        }
        let shown = generation.get_value() + 1;
        generation.set_value(shown);
        set_timeout(
            move || {
                if generation.get_value() == shown {
                    on_close.run(CloseReason::Timeout);
                }
            },
            AUTO_HIDE,
        );
    });

    view! {
        <Show when=move || state.with(|s| s.open)>
            <div class=move || format!("snackbar {}", state.with(|s| s.variant.label())) role="alert">
                <span class="snackbar-message">{move || state.with(|s| s.message.clone())}</span>
                <button
                    class="snackbar-close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(CloseReason::Dismissed)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
