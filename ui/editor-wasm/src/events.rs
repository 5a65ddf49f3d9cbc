//! Event binding and debounce timer plumbing.
//!
//! The persister and the pending `setTimeout` handle live in
//! `thread_local!` slots (WASM is single-threaded). Each `input` event
//! clears the prior timeout and arms a new one; the persister's own
//! deadline makes early or stray wakeups harmless.

use crate::dom::{self, Elements};
use crate::store::LocalStyleStore;
use crate::undo;
use gloo_console::warn;
use ls_style_core::{EditPersister, SaveOutcome, StyleError};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    static PERSISTER: RefCell<EditPersister<LocalStyleStore>> =
        RefCell::new(EditPersister::new(LocalStyleStore::new()));
    static SAVE_TIMER: RefCell<Option<i32>> = RefCell::new(None);
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Bind all editor event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_surface_edit(&els2);
    }) as Box<dyn FnMut(_)>);
    els.surface
        .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Restore the stored text into the surface (undo activation).
pub fn undo_stored() -> Result<Option<String>, StyleError> {
    PERSISTER.with(|p| p.borrow_mut().undo())
}

fn on_surface_edit(els: &Elements) {
    let delay = PERSISTER.with(|p| p.borrow_mut().note_edit(now_ms()));
    arm_save_timer(els, delay);
}

fn arm_save_timer(els: &Elements, delay_ms: u64) {
    let w = dom::window();
    SAVE_TIMER.with(|t| {
        if let Some(id) = t.borrow_mut().take() {
            w.clear_timeout_with_handle(id);
        }
    });

    let els2 = els.clone();
    let cb = Closure::once(move || on_save_timer(&els2));
    let id = w
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .unwrap();
    SAVE_TIMER.with(|t| *t.borrow_mut() = Some(id));
    cb.forget();
}

fn on_save_timer(els: &Elements) {
    SAVE_TIMER.with(|t| *t.borrow_mut() = None);

    let text = dom::surface_text(els);
    let extent = dom::surface_extent(els);
    let outcome = PERSISTER.with(|p| p.borrow_mut().save_if_due(now_ms(), &text, extent));

    match outcome {
        Ok(SaveOutcome::Saved) => {}
        Ok(SaveOutcome::SkippedHidden { offer_undo: true }) => undo::show_undo_control(els),
        Ok(SaveOutcome::SkippedHidden { offer_undo: false }) => {}
        Ok(SaveOutcome::NotDue) => {
            // Timer fired ahead of the deadline; re-arm for the rest
            if let Some(ms) = PERSISTER.with(|p| p.borrow().remaining(now_ms())) {
                arm_save_timer(els, ms);
            }
        }
        Err(err) => warn!(format!("style save failed: {err}")),
    }
}
