//! LiveStyle core.
//!
//! Host-agnostic logic behind the in-page stylesheet editor: the
//! bootstrap loader that populates storage on first run, and the edit
//! persister that debounces saves of the editable stylesheet text.
//! Browser integration (DOM, `localStorage`, `fetch`) lives in the
//! `editor-wasm` crate; this crate only sees the `StyleStore` and
//! `StyleSource` traits, so everything here is testable natively.

pub mod bootstrap;
pub mod error;
pub mod locator;
pub mod persist;
pub mod store;

pub use bootstrap::{StyleSource, decode_style_bytes, ensure_style_initialized};
pub use error::StyleError;
pub use locator::{StyleLocator, default_style_locator};
pub use persist::{EditPersister, PersistState, SAVE_DEBOUNCE_MS, SaveOutcome, SurfaceExtent};
pub use store::{InMemoryStyleStore, STORAGE_KEY, StyleStore};
