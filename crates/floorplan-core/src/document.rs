//! Floorplan document model.
//!
//! A document is decoded once at the load boundary and is read-only from
//! then on: nothing in the viewer holds a mutable reference to it.

use crate::loader::{LoadError, LoadResult};
use crate::schema::{RawDocument, RawDoor, RawFurniture, RawPoint};
use kurbo::{Affine, Point, Rect};

/// Doors are drawn as rectangles of this fixed depth, whatever their width.
pub const DOOR_DEPTH: f64 = 10.0;

/// Minimum number of vertices a region outline needs.
pub const MIN_REGION_POINTS: usize = 3;

/// A closed polygon outline (stroked, never filled).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Create a region from its ordered vertices.
    ///
    /// Returns `None` when fewer than [`MIN_REGION_POINTS`] are given.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= MIN_REGION_POINTS).then_some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Axis-aligned bounds of the outline.
    pub fn bounds(&self) -> Rect {
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(self.points[0], self.points[0]), |acc, p| {
                acc.union_pt(*p)
            })
    }
}

/// A door, drawn as a `width` x [`DOOR_DEPTH`] rectangle centered on `location`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    pub location: Point,
    /// Rotation in radians about `location`.
    pub rotation: f64,
    pub width: f64,
}

impl Door {
    /// Rectangle in the door's local frame, centered on the origin.
    pub fn local_rect(&self) -> Rect {
        let half_width = self.width / 2.0;
        let half_depth = DOOR_DEPTH / 2.0;
        Rect::new(-half_width, -half_depth, half_width, half_depth)
    }

    /// Local frame to scene: translate to the location, then rotate about it.
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.location.to_vec2()) * Affine::rotate(self.rotation)
    }
}

/// A furniture item with a local bounding box and a display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    pub placement: Point,
    /// Rotation in radians about `placement`.
    pub rotation: f64,
    /// Lower corner of the local box, relative to `placement`.
    pub min_bound: Point,
    /// Upper corner of the local box, relative to `placement`.
    pub max_bound: Point,
    pub label: String,
}

impl Furniture {
    /// Box in the furniture's local (unrotated) frame.
    pub fn local_rect(&self) -> Rect {
        Rect::from_points(self.min_bound, self.max_bound)
    }

    /// Local frame to scene: translate to the placement, then rotate about it.
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.placement.to_vec2()) * Affine::rotate(self.rotation)
    }

    /// Scene-space box used for hit testing.
    ///
    /// Rotation is not applied, so for rotated items this box differs from
    /// the drawn footprint.
    pub fn scene_bounds(&self) -> Rect {
        Rect::new(
            self.placement.x + self.min_bound.x,
            self.placement.y + self.min_bound.y,
            self.placement.x + self.max_bound.x,
            self.placement.y + self.max_bound.y,
        )
    }
}

/// A single floor: region outlines, doors and furniture, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorplanDocument {
    regions: Vec<Region>,
    doors: Vec<Door>,
    furnitures: Vec<Furniture>,
}

impl FloorplanDocument {
    pub fn new(regions: Vec<Region>, doors: Vec<Door>, furnitures: Vec<Furniture>) -> Self {
        Self {
            regions,
            doors,
            furnitures,
        }
    }

    /// Decode and validate a document from its JSON text.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn furnitures(&self) -> &[Furniture] {
        &self.furnitures
    }

    pub fn furniture(&self, index: usize) -> Option<&Furniture> {
        self.furnitures.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.doors.is_empty() && self.furnitures.is_empty()
    }

    /// Bounds of everything that gets drawn, or `None` for an empty document.
    ///
    /// Door and furniture footprints include their rotation.
    pub fn bounds(&self) -> Option<Rect> {
        let regions = self.regions.iter().map(Region::bounds);
        let doors = self
            .doors
            .iter()
            .map(|d| d.local_transform().transform_rect_bbox(d.local_rect()));
        let furnitures = self
            .furnitures
            .iter()
            .map(|f| f.local_transform().transform_rect_bbox(f.local_rect()));

        regions
            .chain(doors)
            .chain(furnitures)
            .reduce(|acc, r| acc.union(r))
    }
}

fn to_point(raw: RawPoint) -> Point {
    Point::new(raw.x, raw.y)
}

impl From<RawDoor> for Door {
    fn from(raw: RawDoor) -> Self {
        Self {
            location: to_point(raw.location),
            rotation: raw.rotation,
            width: raw.width,
        }
    }
}

impl From<RawFurniture> for Furniture {
    fn from(raw: RawFurniture) -> Self {
        Self {
            placement: Point::new(raw.x_placement, raw.y_placement),
            rotation: raw.rotation,
            min_bound: to_point(raw.min_bound),
            max_bound: to_point(raw.max_bound),
            label: raw.equip_name,
        }
    }
}

impl TryFrom<RawDocument> for FloorplanDocument {
    type Error = LoadError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let regions = raw
            .regions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, points)| {
                let count = points.len();
                Region::new(points.into_iter().map(to_point).collect()).ok_or_else(|| {
                    LoadError::Parse(format!(
                        "region {} has {} points, at least {} are required",
                        i, count, MIN_REGION_POINTS
                    ))
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let doors = raw
            .doors
            .unwrap_or_default()
            .into_iter()
            .map(Door::from)
            .collect();
        let furnitures = raw
            .furnitures
            .unwrap_or_default()
            .into_iter()
            .map(Furniture::from)
            .collect();

        Ok(Self::new(regions, doors, furnitures))
    }
}
