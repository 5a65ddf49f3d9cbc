//! Fetch-backed style source.
//!
//! Wraps `window.fetch` and drains the response body stream into one
//! byte buffer for the bootstrap loader to decode.

use crate::dom;
use async_trait::async_trait;
use js_sys::{Reflect, Uint8Array};
use ls_style_core::{StyleError, StyleSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStream, ReadableStreamDefaultReader, Request, RequestInit, Response};

pub struct FetchStyleSource;

#[async_trait(?Send)]
impl StyleSource for FetchStyleSource {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StyleError> {
        let net_err = |reason: String| StyleError::Network {
            url: url.to_owned(),
            reason,
        };

        let opts = RequestInit::new();
        opts.set_method("GET");

        let request =
            Request::new_with_str_and_init(url, &opts).map_err(|e| net_err(format!("{e:?}")))?;

        let window = dom::window();
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| net_err(format!("fetch error: {e:?}")))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| net_err("not a Response".to_owned()))?;

        if !resp.ok() {
            return Err(net_err(format!("{} {}", resp.status(), resp.status_text())));
        }

        let body = resp
            .body()
            .ok_or_else(|| net_err("response has no body".to_owned()))?;

        read_all_bytes(&body)
            .await
            .map_err(|e| net_err(format!("stream error: {e:?}")))
    }
}

/// Drain a `ReadableStream` of `Uint8Array` chunks into one buffer.
pub async fn read_all_bytes(stream: &ReadableStream) -> Result<Vec<u8>, JsValue> {
    let reader: ReadableStreamDefaultReader = stream.get_reader().dyn_into()?;

    let mut bytes = Vec::new();
    loop {
        let chunk = JsFuture::from(reader.read()).await?;
        let done = Reflect::get(&chunk, &JsValue::from_str("done"))?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }
        let value = Reflect::get(&chunk, &JsValue::from_str("value"))?;
        bytes.extend(Uint8Array::new(&value).to_vec());
    }
    reader.release_lock();

    Ok(bytes)
}
