//! Floorplan Viewer Application
//!
//! The viewer component plus its shells: a WASM entry point that wires the
//! component to the page, and a native exporter that renders to SVG.

mod config;
mod error;
mod overlay;
mod viewer;

pub use config::{ClickMode, DEFAULT_DOCUMENT_URL, DomIds, PLAN_PARAM, ViewerConfig, plan_from_params};
pub use error::ViewerError;
pub use overlay::{LOAD_FAILED_MESSAGE, LogOverlay, Overlay};
pub use viewer::FloorplanViewer;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub mod native;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
