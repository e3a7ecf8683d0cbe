use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coordinate::{Coordinate, LatLng};
use crate::error::{GeoError, Result};

/// Axis-aligned lat/lng extent in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Inverted box that any real coordinate will shrink-wrap on first fold
    pub const EMPTY: BoundingBox = BoundingBox {
        min_lng: 180.0,
        max_lng: -180.0,
        min_lat: 90.0,
        max_lat: -90.0,
    };

    /// Grow the box to include `point`
    pub fn expand(&mut self, point: &impl LatLng) {
        self.min_lng = self.min_lng.min(point.lng());
        self.max_lng = self.max_lng.max(point.lng());
        self.min_lat = self.min_lat.min(point.lat());
        self.max_lat = self.max_lat.max(point.lat());
    }

    /// True when min > max on either axis, e.g. the box of an empty input
    pub fn is_degenerate(&self) -> bool {
        self.min_lng > self.max_lng || self.min_lat > self.max_lat
    }

    pub fn contains(&self, point: &impl LatLng) -> bool {
        is_point_in_box(point, self)
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Decode a box from JSON, requiring all four fields
    pub fn from_json(value: &Value) -> Result<Self> {
        BoundingBox::deserialize(value).map_err(|e| {
            GeoError::InvalidArgument(format!("Argument not a bounding box: {}", e))
        })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Minimal box containing every point. Empty input yields
/// [`BoundingBox::EMPTY`], which callers must check for themselves.
pub fn bounding_box<T: LatLng>(points: &[T]) -> BoundingBox {
    points.iter().fold(BoundingBox::EMPTY, |mut b, p| {
        b.expand(p);
        b
    })
}

/// Single box enclosing every box in `boxes`
pub fn outer_bounding_box(boxes: &[BoundingBox]) -> BoundingBox {
    let corners: Vec<Coordinate> = boxes
        .iter()
        .flat_map(|b| {
            [
                Coordinate::new(b.min_lat, b.min_lng),
                Coordinate::new(b.max_lat, b.max_lng),
            ]
        })
        .collect();

    bounding_box(&corners)
}

/// Inclusive containment: points on an edge count as inside
pub fn is_point_in_box(point: &impl LatLng, bbox: &BoundingBox) -> bool {
    point.lng() >= bbox.min_lng
        && point.lng() <= bbox.max_lng
        && point.lat() >= bbox.min_lat
        && point.lat() <= bbox.max_lat
}
