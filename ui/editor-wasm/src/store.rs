//! `localStorage`-backed style store.

use ls_style_core::{STORAGE_KEY, StyleError, StyleStore};
use web_sys::Storage;

/// Per-origin persistent store over `window.localStorage`.
#[derive(Default)]
pub struct LocalStyleStore;

impl LocalStyleStore {
    pub fn new() -> Self {
        LocalStyleStore
    }

    fn storage() -> Result<Storage, StyleError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StyleError::Storage("localStorage unavailable".to_owned()))
    }
}

impl StyleStore for LocalStyleStore {
    fn get(&self) -> Result<Option<String>, StyleError> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| StyleError::Storage(format!("{e:?}")))
    }

    fn set(&self, text: &str) -> Result<(), StyleError> {
        Self::storage()?
            .set_item(STORAGE_KEY, text)
            .map_err(|e| StyleError::Storage(format!("{e:?}")))
    }
}
