pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod places;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
