//! Drawing surface abstraction and the floorplan scene renderer.

use floorplan_core::{Door, FloorplanDocument, Furniture, Region, ViewTransform};
use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A 2D drawing target.
///
/// Geometry passed to the drawing calls is in the coordinate system set by
/// the last [`Surface::set_transform`]; `clear` works in device space and
/// leaves the transform at identity.
pub trait Surface {
    /// Resize the backing store. May discard previous contents.
    fn resize(&mut self, size: Size);

    /// Current size in device pixels.
    fn size(&self) -> Size;

    /// Erase everything and reset the transform to identity.
    fn clear(&mut self);

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Stroke a closed polygon through `points`.
    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64);

    /// Fill an axis-aligned rectangle (axis-aligned in the current transform).
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Colors and stroke widths used for a floorplan.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    /// Optional background fill; `None` leaves the cleared surface transparent.
    pub background: Option<Color>,
    pub region_stroke: Color,
    /// Region outline width in scene units.
    pub region_stroke_width: f64,
    pub door_fill: Color,
    pub furniture_fill: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: None,
            region_stroke: Color::from_rgba8(0, 0, 0, 255),
            region_stroke_width: 1.0,
            door_fill: Color::from_rgba8(165, 42, 42, 255), // brown
            furniture_fill: Color::from_rgba8(211, 211, 211, 255), // lightgray
        }
    }
}

impl RenderStyle {
    /// Set the background color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The document to draw.
    pub document: &'a FloorplanDocument,
    /// Scene-to-screen transform.
    pub view: ViewTransform,
    /// Viewport size in pixels.
    pub viewport_size: Size,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(document: &'a FloorplanDocument, view: ViewTransform, viewport_size: Size) -> Self {
        Self {
            document,
            view,
            viewport_size,
        }
    }
}

/// Draws a floorplan document onto a [`Surface`].
///
/// Regions are drawn first, then doors, then furniture; later items paint
/// over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    style: RenderStyle,
}

impl SceneRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Render one full frame.
    pub fn build_scene<S: Surface + ?Sized>(&self, surface: &mut S, ctx: &RenderContext<'_>) {
        surface.resize(ctx.viewport_size);
        surface.clear();

        if let Some(background) = self.style.background {
            let size = surface.size();
            surface.fill_rect(Rect::new(0.0, 0.0, size.width, size.height), background);
        }

        let view_transform = ctx.view.transform();

        for region in ctx.document.regions() {
            self.render_region(surface, region, view_transform);
        }
        for door in ctx.document.doors() {
            self.render_door(surface, door, view_transform);
        }
        for furniture in ctx.document.furnitures() {
            self.render_furniture(surface, furniture, view_transform);
        }
    }

    fn render_region<S: Surface + ?Sized>(&self, surface: &mut S, region: &Region, transform: Affine) {
        surface.set_transform(transform);
        surface.stroke_polygon(
            region.points(),
            self.style.region_stroke,
            self.style.region_stroke_width,
        );
    }

    fn render_door<S: Surface + ?Sized>(&self, surface: &mut S, door: &Door, transform: Affine) {
        surface.set_transform(transform * door.local_transform());
        surface.fill_rect(door.local_rect(), self.style.door_fill);
    }

    fn render_furniture<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        furniture: &Furniture,
        transform: Affine,
    ) {
        surface.set_transform(transform * furniture.local_transform());
        surface.fill_rect(furniture.local_rect(), self.style.furniture_fill);
    }
}

/// CSS color string for a [`Color`], as understood by both canvas and SVG.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {:.3})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}
