mod api;
mod app;
mod components;

use wasm_bindgen::prelude::wasm_bindgen;

pub use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
