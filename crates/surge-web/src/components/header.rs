use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Surge"</h1>
            <span class="subtitle">"Load Testing Dashboard"</span>
        </header>
    }
}
