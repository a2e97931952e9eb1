//! Errors raised while starting the viewer.

use floorplan_core::LoadError;
use floorplan_render::RendererError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Missing element #{0}")]
    MissingElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("IO error: {0}")]
    Io(String),
}
