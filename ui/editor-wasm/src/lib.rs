//! LiveStyle editor WASM frontend.
//!
//! Injects a live stylesheet editor into the page: the first `<style>`
//! element becomes the editable surface, its text is persisted to
//! per-origin `localStorage`, and a default stylesheet is fetched on
//! first run. Modularised for extensibility: each concern lives in its
//! own module.

pub mod dom;
pub mod events;
pub mod net;
pub mod store;
pub mod undo;

use gloo_console::warn;
use ls_style_core::ensure_style_initialized;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    dom::prepare_surface(&els);

    // Bootstrap storage, then always display what the store holds
    let hostname = dom::window().location().hostname().unwrap_or_default();
    let store = store::LocalStyleStore::new();
    match ensure_style_initialized(&store, &net::FetchStyleSource, &hostname).await {
        Ok(text) => dom::set_surface_text(&els, &text),
        // Leave the surface blank; the next page load retries
        Err(err) => warn!(format!("style bootstrap failed: {err}")),
    }

    events::bind_events(&els);

    Ok(())
}
