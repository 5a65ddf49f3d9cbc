//! First-run bootstrap of the stored stylesheet.
//!
//! When nothing is persisted yet, the default stylesheet is fetched
//! from the locator derived in [`crate::locator`] and written to the
//! store. A present (non-empty) value short-circuits the fetch
//! entirely.

use crate::error::StyleError;
use crate::locator::default_style_locator;
use crate::store::StyleStore;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Async byte fetch for the default stylesheet.
///
/// `?Send` because the browser implementation drives JS promises,
/// whose futures are not `Send`.
#[async_trait(?Send)]
pub trait StyleSource {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StyleError>;
}

/// Decode stylesheet bytes by mapping each byte to the char with that
/// code point. Not a charset-aware decode: the original stylesheet is
/// treated as a sequence of code points <= 255, and this mapping is
/// kept for compatibility with it. Total for every byte value.
pub fn decode_style_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Ensure the store holds stylesheet text, fetching the default on
/// first run, and return the value to display.
///
/// Present non-empty text wins without any network activity. On an
/// empty store the fetched text is written unconditionally; a fetch
/// failure leaves the store untouched and propagates, so the surface
/// simply stays blank until the next page load retries.
pub async fn ensure_style_initialized<S, F>(
    store: &S,
    source: &F,
    hostname: &str,
) -> Result<String, StyleError>
where
    S: StyleStore,
    F: StyleSource,
{
    match store.get()? {
        Some(existing) if !existing.is_empty() => {
            debug!(len = existing.len(), "stored styles present, skipping bootstrap");
        }
        _ => {
            let locator = default_style_locator(hostname);
            debug!(url = locator.as_str(), "bootstrapping default styles");
            let bytes = match source.fetch_bytes(locator.as_str()).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(url = locator.as_str(), %err, "bootstrap fetch failed");
                    return Err(err);
                }
            };
            store.set(&decode_style_bytes(&bytes))?;
        }
    }

    // Display always reflects what the store actually holds.
    Ok(store.get()?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{USER_STYLES_PREFIX, USER_STYLES_SUFFIX};
    use crate::store::InMemoryStyleStore;
    use std::cell::{Cell, RefCell};

    struct FakeSource {
        body: Vec<u8>,
        calls: Cell<usize>,
        last_url: RefCell<Option<String>>,
    }

    impl FakeSource {
        fn new(body: &[u8]) -> Self {
            Self {
                body: body.to_vec(),
                calls: Cell::new(0),
                last_url: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl StyleSource for FakeSource {
        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StyleError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_url.borrow_mut() = Some(url.to_owned());
            Ok(self.body.clone())
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl StyleSource for FailingSource {
        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StyleError> {
            Err(StyleError::Network {
                url: url.to_owned(),
                reason: "connection refused".to_owned(),
            })
        }
    }

    #[test]
    fn decode_maps_bytes_to_char_codes() {
        assert_eq!(decode_style_bytes(&[104, 105]), "hi");
        assert_eq!(decode_style_bytes(&[]), "");
        // Bytes above 127 map straight to U+0080..U+00FF
        assert_eq!(decode_style_bytes(&[0xE9]), "\u{e9}");
    }

    #[tokio::test]
    async fn empty_store_fetches_decodes_and_persists() {
        let store = InMemoryStyleStore::new();
        let source = FakeSource::new(&[104, 105]);

        let shown = ensure_style_initialized(&store, &source, "bob.github.io")
            .await
            .unwrap();

        assert_eq!(shown, "hi");
        assert_eq!(store.get().unwrap().as_deref(), Some("hi"));
        assert_eq!(source.calls.get(), 1);
        assert_eq!(
            source.last_url.borrow().as_deref(),
            Some(format!("{USER_STYLES_PREFIX}bob{USER_STYLES_SUFFIX}").as_str())
        );
    }

    #[tokio::test]
    async fn present_value_skips_fetch_entirely() {
        let store = InMemoryStyleStore::with_value("body{color:red}");
        let source = FakeSource::new(&[104, 105]);

        let shown = ensure_style_initialized(&store, &source, "github.com")
            .await
            .unwrap();

        assert_eq!(shown, "body{color:red}");
        assert_eq!(store.get().unwrap().as_deref(), Some("body{color:red}"));
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn empty_string_counts_as_absent() {
        let store = InMemoryStyleStore::with_value("");
        let source = FakeSource::new(b"p{margin:0}");

        let shown = ensure_style_initialized(&store, &source, "example.com")
            .await
            .unwrap();

        assert_eq!(shown, "p{margin:0}");
        assert_eq!(source.calls.get(), 1);
        assert_eq!(source.last_url.borrow().as_deref(), Some("/styles.css"));
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_leaves_store_empty() {
        let store = InMemoryStyleStore::new();

        let err = ensure_style_initialized(&store, &FailingSource, "example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, StyleError::Network { .. }));
        assert_eq!(store.get().unwrap(), None);
    }
}
