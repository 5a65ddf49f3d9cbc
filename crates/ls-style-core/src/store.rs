use crate::error::StyleError;
use std::cell::RefCell;

/// Fixed key under which the stylesheet text is persisted, per origin.
pub const STORAGE_KEY: &str = "styles";

/// Per-origin persistent key-value storage for the stylesheet text.
///
/// Synchronous on purpose: the browser `localStorage` backing it is
/// synchronous, and the single-threaded event loop makes it the only
/// writer at any given time.
pub trait StyleStore {
    fn get(&self) -> Result<Option<String>, StyleError>;
    fn set(&self, text: &str) -> Result<(), StyleError>;
}

/// In-memory store for tests and non-browser embedding.
#[derive(Default)]
pub struct InMemoryStyleStore {
    value: RefCell<Option<String>>,
}

impl InMemoryStyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(text: &str) -> Self {
        Self {
            value: RefCell::new(Some(text.to_owned())),
        }
    }
}

impl StyleStore for InMemoryStyleStore {
    fn get(&self) -> Result<Option<String>, StyleError> {
        Ok(self.value.borrow().clone())
    }

    fn set(&self, text: &str) -> Result<(), StyleError> {
        *self.value.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}
