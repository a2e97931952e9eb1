//! Browser `fetch` document source for WebAssembly.

use super::{BoxFuture, DocumentLoader, LoadError, LoadResult, log_outcome};
use crate::document::FloorplanDocument;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches documents over HTTP relative to the page.
///
/// Not Send/Sync: fetch promises are tied to the browser's main thread.
#[derive(Default)]
pub struct FetchLoader;

impl FetchLoader {
    pub fn new() -> Self {
        Self
    }

    async fn fetch_text(url: &str) -> LoadResult<String> {
        let window =
            web_sys::window().ok_or_else(|| LoadError::Network("No window object".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| LoadError::Network(format!("Fetch failed: {:?}", e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| LoadError::Network("Fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(LoadError::Network(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let text_promise = response
            .text()
            .map_err(|e| LoadError::Network(format!("Failed to read body: {:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| LoadError::Network(format!("Failed to read body: {:?}", e)))?;

        text.as_string()
            .ok_or_else(|| LoadError::Parse("Response body is not text".to_string()))
    }
}

impl DocumentLoader for FetchLoader {
    fn load(&self, url: &str) -> BoxFuture<'_, LoadResult<FloorplanDocument>> {
        let url = url.to_string();
        Box::pin(async move {
            let result = Self::fetch_text(&url)
                .await
                .and_then(|json| FloorplanDocument::from_json(&json));
            log_outcome(&url, result)
        })
    }
}
