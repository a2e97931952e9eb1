//! In-memory document source.

use super::{BoxFuture, DocumentLoader, LoadError, LoadResult, log_outcome};
use crate::document::FloorplanDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// Serves JSON payloads registered ahead of time, keyed by URL.
///
/// Useful for tests and for embedding a floorplan in the binary.
#[derive(Default)]
pub struct MemoryLoader {
    payloads: RwLock<HashMap<String, String>>,
}

impl MemoryLoader {
    /// Create a new empty memory loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the payload served for `url`.
    pub fn insert(&self, url: impl Into<String>, json: impl Into<String>) {
        match self.payloads.write() {
            Ok(mut payloads) => {
                payloads.insert(url.into(), json.into());
            }
            Err(e) => log::warn!("Memory loader lock poisoned: {}", e),
        }
    }

    /// Builder-style variant of [`MemoryLoader::insert`].
    pub fn with_payload(self, url: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(url, json);
        self
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, url: &str) -> BoxFuture<'_, LoadResult<FloorplanDocument>> {
        let url = url.to_string();
        Box::pin(async move {
            let json = {
                let payloads = self
                    .payloads
                    .read()
                    .map_err(|e| LoadError::Network(format!("Lock error: {}", e)))?;
                payloads.get(&url).cloned()
            };
            let result = match json {
                Some(json) => FloorplanDocument::from_json(&json),
                None => Err(LoadError::Network(format!("{} not found", url))),
            };
            log_outcome(&url, result)
        })
    }
}
