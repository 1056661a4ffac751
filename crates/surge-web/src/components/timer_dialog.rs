use std::time::Duration;

use leptos::prelude::*;
use surge_core::{Countdown, CountdownState};

const TICK: Duration = Duration::from_secs(1);

/// Countdown shown while a load test runs. Reaching zero closes it the same
/// way the Close button does.
#[component]
pub fn TimerDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] minutes: Signal<u32>,
    on_close: Callback<()>,
) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::from_minutes(minutes.get_untracked()));

    // Restart from the configured duration every time the dialog opens
    Effect::new(move || {
        if open.get() {
            countdown.set(Countdown::from_minutes(minutes.get_untracked()));
        }
    });

    let handle = set_interval_with_handle(
        move || {
            if !open.get_untracked() {
                return;
            }
            let mut state = CountdownState::Running;
            countdown.update(|c| state = c.tick(TICK));
            if state == CountdownState::Complete {
                on_close.run(());
            }
        },
        TICK,
    )
    .ok();
    on_cleanup(move || {
        if let Some(handle) = handle {
            handle.clear();
        }
    });

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog timer-dialog" role="dialog">
                    <h3>"Load test running"</h3>
                    <div class="countdown">{move || countdown.with(|c| c.label())}</div>
                    <progress
                        max="1"
                        value=move || format!("{:.4}", countdown.with(|c| c.fraction_remaining()))
                    ></progress>
                    <p class="placeholder">"Results will appear below when the run finishes."</p>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
