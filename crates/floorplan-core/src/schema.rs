//! Wire format of floorplan documents.
//!
//! These structs mirror the JSON exactly (PascalCase keys, mixed casing on
//! furniture entries). They are converted into the validated model in
//! [`crate::document`] and never used past the load boundary.

use serde::{Deserialize, Serialize};

/// `{ "X": .., "Y": .. }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDoor {
    #[serde(rename = "Location")]
    pub location: RawPoint,
    #[serde(rename = "Rotation")]
    pub rotation: f64,
    #[serde(rename = "Width")]
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFurniture {
    #[serde(rename = "xPlacement")]
    pub x_placement: f64,
    #[serde(rename = "yPlacement")]
    pub y_placement: f64,
    pub rotation: f64,
    #[serde(rename = "MinBound")]
    pub min_bound: RawPoint,
    #[serde(rename = "MaxBound")]
    pub max_bound: RawPoint,
    #[serde(rename = "equipName")]
    pub equip_name: String,
}

/// Top-level document. Absent or `null` keys mean "nothing to draw".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "Regions", default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<Vec<RawPoint>>>,
    #[serde(rename = "Doors", default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<Vec<RawDoor>>,
    #[serde(rename = "Furnitures", default, skip_serializing_if = "Option::is_none")]
    pub furnitures: Option<Vec<RawFurniture>>,
}
