//! SVG surface for static exports.

use crate::renderer::{Surface, css_color};
use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use std::fmt::Write;

/// Accumulates draw calls as SVG elements.
///
/// Call [`SvgSurface::finish`] to get the complete document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    transform: Affine,
    body: String,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            body: String::new(),
        }
    }

    /// The complete SVG document for what has been drawn since the last clear.
    pub fn finish(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn transform_attr(&self) -> String {
        if self.transform == Affine::IDENTITY {
            return String::new();
        }
        let [a, b, c, d, e, f] = self.transform.as_coeffs();
        format!(
            r#" transform="matrix({} {} {} {} {} {})""#,
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d),
            fmt_num(e),
            fmt_num(f)
        )
    }
}

/// Format a number without trailing zeros.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

impl Surface for SvgSurface {
    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.body.clear();
        self.transform = Affine::IDENTITY;
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let transform = self.transform_attr();
        let _ = writeln!(
            self.body,
            r#"  <polygon points="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
            points,
            css_color(color),
            fmt_num(width),
            transform
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.abs();
        let transform = self.transform_attr();
        let _ = writeln!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            fmt_num(rect.x0),
            fmt_num(rect.y0),
            fmt_num(rect.width()),
            fmt_num(rect.height()),
            css_color(color),
            transform
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let surface = SvgSurface::new(Size::new(640.0, 480.0));
        let svg = surface.finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_polygon_and_rect() {
        let mut surface = SvgSurface::new(Size::new(100.0, 100.0));
        surface.stroke_polygon(
            &[Point::new(0.0, 0.0), Point::new(10.5, 0.0), Point::new(10.5, 10.0)],
            Color::from_rgba8(0, 0, 0, 255),
            1.0,
        );
        surface.set_transform(Affine::translate((5.0, 6.0)) * Affine::scale(2.0));
        surface.fill_rect(Rect::new(-1.0, -1.0, 1.0, 1.0), Color::from_rgba8(211, 211, 211, 255));

        let svg = surface.finish();
        assert!(svg.contains(
            r#"<polygon points="0,0 10.5,0 10.5,10" fill="none" stroke="rgb(0, 0, 0)" stroke-width="1"/>"#
        ));
        assert!(svg.contains(
            r#"<rect x="-1" y="-1" width="2" height="2" fill="rgb(211, 211, 211)" transform="matrix(2 0 0 2 5 6)"/>"#
        ));
    }

    #[test]
    fn test_clear_drops_elements() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::from_rgba8(0, 0, 0, 255));
        surface.clear();
        assert!(!surface.finish().contains("<rect"));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(1234.56789), "1234.5679");
    }
}
