//! DOM element bindings.
//!
//! The editable surface is the page's first `<style>` element, shown
//! and edited in place. All references are resolved once at startup.

use ls_style_core::SurfaceExtent;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// DOM references used by the editor.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    /// The editable `<style>` element.
    pub surface: HtmlElement,
    /// Where transient controls (undo) are appended.
    pub mount: HtmlElement,
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let surface: HtmlElement = query("style")
            .ok_or_else(|| JsValue::from_str("missing <style> element"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("<style> is not an HtmlElement"))?;
        let mount = doc()
            .body()
            .ok_or_else(|| JsValue::from_str("missing <body>"))?;
        Ok(Elements { surface, mount })
    }
}

/// Make the surface directly editable; page CSS decides whether it is
/// rendered at all.
pub fn prepare_surface(els: &Elements) {
    if !els.surface.is_content_editable() {
        els.surface.set_content_editable("true");
    }
}

pub fn surface_text(els: &Elements) -> String {
    els.surface.inner_text()
}

pub fn set_surface_text(els: &Elements, text: &str) {
    els.surface.set_inner_text(text);
}

pub fn surface_extent(els: &Elements) -> SurfaceExtent {
    SurfaceExtent::new(els.surface.offset_width(), els.surface.offset_height())
}
