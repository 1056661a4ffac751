use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::load_test::LoadTestPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LoadTestPage />
                        <Route path=path!("/load-test") view=LoadTestPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
