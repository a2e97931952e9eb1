//! Loading floorplan documents from a URL.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod fetch;

pub use memory::MemoryLoader;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileLoader;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchLoader;

use crate::document::FloorplanDocument;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Why a document could not be loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The transport failed or answered with a non-success status.
    #[error("Network error: {0}")]
    Network(String),
    /// The payload is not a valid floorplan document.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Source of floorplan documents.
///
/// On native platforms, implementations must be Send + Sync.
#[cfg(not(target_arch = "wasm32"))]
pub trait DocumentLoader: Send + Sync {
    /// Fetch and decode the document at `url`.
    fn load(&self, url: &str) -> BoxFuture<'_, LoadResult<FloorplanDocument>>;
}

/// Source of floorplan documents (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait DocumentLoader {
    /// Fetch and decode the document at `url`.
    fn load(&self, url: &str) -> BoxFuture<'_, LoadResult<FloorplanDocument>>;
}

/// Log the outcome of a load and pass it through unchanged.
pub(crate) fn log_outcome(
    url: &str,
    result: LoadResult<FloorplanDocument>,
) -> LoadResult<FloorplanDocument> {
    match &result {
        Ok(doc) => log::info!(
            "Loaded floorplan {}: {} regions, {} doors, {} furnitures",
            url,
            doc.regions().len(),
            doc.doors().len(),
            doc.furnitures().len()
        ),
        Err(e) => log::error!("Failed to load floorplan {}: {}", url, e),
    }
    result
}
