//! View transform for pan/zoom.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed scale (zoomed all the way out).
pub const MIN_SCALE: f64 = 0.125;
/// Largest allowed scale (zoomed all the way in).
pub const MAX_SCALE: f64 = 4.0;
/// Multiplicative step used by the zoom buttons.
pub const ZOOM_STEP: f64 = 1.1;
/// Scale change per unit of wheel delta. Negative wheel deltas zoom in.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.01;

/// Scale and pan offset mapping scene space onto the screen.
///
/// The forward mapping is `scene * scale + offset`, which is the same as
/// translating by `offset` and then scaling uniformly by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Uniform scale, always within [`MIN_SCALE`, `MAX_SCALE`].
    scale: f64,
    /// Pan offset in screen pixels.
    offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Create a view transform at scale 1 with no pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view transform with an explicit scale and offset.
    ///
    /// The scale is clamped like any other mutation.
    pub fn with_scale_and_offset(scale: f64, offset: Vec2) -> Self {
        Self {
            scale: clamp_scale(scale),
            offset,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Affine that maps scene coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Convert a screen point to scene coordinates.
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.scale - self.offset.x / self.scale,
            screen.y / self.scale - self.offset.y / self.scale,
        )
    }

    /// Convert a scene point to screen coordinates.
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.scale + self.offset.x,
            scene.y * self.scale + self.offset.y,
        )
    }

    /// Zoom in by one button step.
    pub fn zoom_in(&mut self) {
        self.scale = clamp_scale(self.scale * ZOOM_STEP);
    }

    /// Zoom out by one button step.
    pub fn zoom_out(&mut self) {
        self.scale = clamp_scale(self.scale / ZOOM_STEP);
    }

    /// Apply a wheel delta. Scrolling up (negative delta) zooms in.
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = clamp_scale(self.scale + delta * -WHEEL_ZOOM_SENSITIVITY);
    }

    /// Pan by a delta in screen pixels. Panning is unbounded.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Back to scale 1 with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fit the view to show the given scene bounds centered in the viewport.
    ///
    /// The resulting scale is still clamped, so very large or very small
    /// floors may not fit exactly.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport: Size, padding: f64) {
        if bounds.is_zero_area() {
            self.reset();
            return;
        }

        let padded_viewport = Size::new(
            (viewport.width - padding * 2.0).max(1.0),
            (viewport.height - padding * 2.0).max(1.0),
        );

        let scale_x = padded_viewport.width / bounds.width();
        let scale_y = padded_viewport.height / bounds.height();
        self.scale = clamp_scale(scale_x.min(scale_y));

        let bounds_center = bounds.center();
        let viewport_center = Point::new(viewport.width / 2.0, viewport.height / 2.0);

        self.offset = Vec2::new(
            viewport_center.x - bounds_center.x * self.scale,
            viewport_center.y - bounds_center.y * self.scale,
        );
    }
}

fn clamp_scale(scale: f64) -> f64 {
    // Scale must never become NaN.
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
