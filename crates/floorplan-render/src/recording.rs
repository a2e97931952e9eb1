//! Surface that records draw calls instead of rasterizing them.

use crate::renderer::Surface;
use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

/// A recorded draw call, with the transform that was current at the time.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Resize(Size),
    Clear,
    StrokePolygon {
        points: Vec<Point>,
        color: Color,
        width: f64,
        transform: Affine,
    },
    FillRect {
        rect: Rect,
        color: Color,
        transform: Affine,
    },
}

/// Records every call made against it.
///
/// Used by tests and by tools that want to inspect a frame without a
/// display.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            transform: Affine::IDENTITY,
            commands: Vec::new(),
            frames: 0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface was cleared, i.e. frames started.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Stroked polygons with their transforms, in draw order.
    pub fn stroked_polygons(&self) -> impl Iterator<Item = (&[Point], Affine)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokePolygon {
                points, transform, ..
            } => Some((points.as_slice(), *transform)),
            _ => None,
        })
    }

    /// Filled rectangles with their transforms, in draw order.
    pub fn fill_rects(&self) -> impl Iterator<Item = (Rect, Affine)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect {
                rect, transform, ..
            } => Some((*rect, *transform)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.size = size;
        self.commands.push(DrawCommand::Resize(size));
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        // Keep a resize issued right before the clear.
        let pending_resize = match self.commands.last() {
            Some(DrawCommand::Resize(size)) => Some(*size),
            _ => None,
        };
        self.commands.clear();
        if let Some(size) = pending_resize {
            self.commands.push(DrawCommand::Resize(size));
        }
        self.commands.push(DrawCommand::Clear);
        self.transform = Affine::IDENTITY;
        self.frames += 1;
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
            transform: self.transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            transform: self.transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new();
        surface.resize(Size::new(10.0, 10.0));
        surface.clear();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::from_rgba8(1, 2, 3, 255));
        assert_eq!(surface.commands().len(), 3);

        surface.resize(Size::new(20.0, 20.0));
        surface.clear();
        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.commands().len(), 2);
        assert!(matches!(surface.commands()[0], DrawCommand::Resize(s) if s == Size::new(20.0, 20.0)));
        assert_eq!(surface.fill_rects().count(), 0);
    }

    #[test]
    fn test_records_current_transform() {
        let mut surface = RecordingSurface::new();
        let t = Affine::translate((3.0, 4.0));
        surface.set_transform(t);
        surface.stroke_polygon(
            &[Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            Color::from_rgba8(0, 0, 0, 255),
            1.0,
        );
        let (points, transform) = surface.stroked_polygons().next().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(transform, t);
    }
}
