//! Undo control lifecycle.
//!
//! Created when a save is skipped because the surface was invisible;
//! activating it copies the stored stylesheet back into the surface
//! and removes the control permanently. Id-guarded so at most one
//! exists at a time.

use crate::dom::{self, Elements};
use crate::events;
use gloo_console::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlButtonElement;

const UNDO_BUTTON_ID: &str = "styleUndoButton";

/// Append the one-shot undo button to the mount, unless already shown.
pub fn show_undo_control(els: &Elements) {
    if dom::by_id(UNDO_BUTTON_ID).is_some() {
        return;
    }

    let btn: HtmlButtonElement = dom::create_element("button").unchecked_into();
    btn.set_id(UNDO_BUTTON_ID);
    btn.set_text_content(Some("Undo style changes"));

    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        on_undo(&els2);
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let _ = els.mount.append_child(&btn);
}

fn on_undo(els: &Elements) {
    match events::undo_stored() {
        Ok(stored) => dom::set_surface_text(els, stored.as_deref().unwrap_or_default()),
        Err(err) => warn!(format!("style undo failed: {err}")),
    }
    if let Some(btn) = dom::by_id(UNDO_BUTTON_ID) {
        btn.remove();
    }
}
