// lib.rs - Root module for the course_catalog library
//
// The catalog core (model, query assembly, HTTP client, state machine)
// always compiles. The Leptos UI is gated behind `ssr` / `hydrate`.

/// Sample course data and an in-memory course source
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// WASM entry point called by the cargo-leptos bootstrap script
        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
