//! Floorplan Render Library
//!
//! Drawing surface abstraction and the scene renderer for the floorplan
//! viewer. Surfaces exist for the browser canvas (WASM), SVG export and
//! recording draw calls in tests.

mod recording;
mod renderer;
mod svg;

#[cfg(target_arch = "wasm32")]
mod canvas2d;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{
    RenderContext, RenderResult, RenderStyle, RendererError, SceneRenderer, Surface, css_color,
};
pub use svg::SvgSurface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
