//! Leptos frontend for the browser host.

pub mod app;

use wasm_bindgen::prelude::*;

use crate::Bootstrap;
use crate::bootstrap::BOOTSTRAP_ELEMENT_ID;

/// Read the page's bootstrap payload; a missing element yields an empty one.
fn read_bootstrap() -> Bootstrap {
    let Some(json) = leptos::document()
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Bootstrap::default();
    };

    Bootstrap::from_json(&json).unwrap_or_else(|e| {
        leptos::logging::error!("ignoring bootstrap payload: {e}");
        Bootstrap::default()
    })
}

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let bootstrap = read_bootstrap();
    leptos::mount_to_body(move || leptos::view! { <app::App bootstrap=bootstrap.clone()/> });
}
