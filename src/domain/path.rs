use geo::LineString;
use serde_json::Value;

use super::point::Point;
use crate::error::{GeoError, PathError, Result};
use crate::geometry::{
    BoundingBox, Coordinate, LatLng, bounding_box, p2p, simplify::compression_ratio,
    simplify_indices,
};

/// An ordered track of two or more attributed points.
///
/// Distances and extents are recomputed on every call. `simplify` is the
/// only operation that changes the point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    original_len: usize,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()).into());
        }
        let original_len = points.len();
        Ok(Self {
            points,
            original_len,
        })
    }

    /// Build from any coordinate-like values, carrying no attributes
    pub fn from_coordinates<T: LatLng>(coords: &[T]) -> Result<Self> {
        let points = coords
            .iter()
            .map(|c| Point::new(c.lat(), c.lng()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// Build from a JSON array whose items are all `[lng, lat]` pairs or all
    /// point objects
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| PathError::UnrecognisedInput("input not an array".to_string()))?;

        let all_pairs = items
            .iter()
            .all(|item| item.as_array().is_some_and(|a| a.len() == 2));
        let all_objects = items.iter().all(Value::is_object);

        if !items.is_empty() && !all_pairs && !all_objects {
            return Err(PathError::UnrecognisedInput(
                "mixed or non point-like items".to_string(),
            )
            .into());
        }

        let points = items
            .iter()
            .map(Point::from_json)
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a path holds at least two points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn get_point(&self, index: usize) -> Result<&Point> {
        self.points
            .get(index)
            .ok_or_else(|| PathError::IndexOutOfRange(index).into())
    }

    pub fn first_point(&self) -> &Point {
        &self.points[0]
    }

    pub fn last_point(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    pub fn lng_lats(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(Point::lng_lat).collect()
    }

    /// Bare coordinates with attributes stripped
    pub fn point_likes(&self) -> Vec<Coordinate> {
        self.points.iter().map(Coordinate::of).collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(&self.points)
    }

    /// Total length of the track in meters
    pub fn distance(&self) -> f64 {
        self.points.windows(2).map(|w| p2p(&w[0], &w[1])).sum()
    }

    /// Distance of each point from its predecessor; the first entry is 0
    pub fn delta_distance(&self) -> Vec<f64> {
        std::iter::once(0.0)
            .chain(self.points.windows(2).map(|w| p2p(&w[1], &w[0])))
            .collect()
    }

    /// Running total of `delta_distance`
    pub fn cumulative_distance(&self) -> Vec<f64> {
        self.delta_distance()
            .into_iter()
            .scan(0.0, |total, d| {
                *total += d;
                Some(*total)
            })
            .collect()
    }

    /// Current length over the length at construction, to 3 decimal places
    pub fn simplification_ratio(&self) -> f64 {
        compression_ratio(self.points.len(), self.original_len)
    }

    /// Drop points that deviate less than `tolerance` meters from the chord
    /// joining their neighbours. Surviving points keep their attributes.
    pub fn simplify(&mut self, tolerance: f64) -> Result<()> {
        let retained = simplify_indices(&self.points, tolerance)?;

        let mut keep = retained.into_iter().peekable();
        let mut index = 0;
        self.points.retain(|_| {
            let hit = keep.next_if_eq(&index).is_some();
            index += 1;
            hit
        });

        Ok(())
    }

    /// Attach one value per point under `name`. Points that already carry
    /// `name` keep their existing value.
    pub fn add_param(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.points.len() {
            return Err(GeoError::Path(PathError::LengthMismatch {
                expected: self.points.len(),
                got: values.len(),
            }));
        }

        for (point, value) in self.points.iter_mut().zip(values) {
            point.add_param(name, value);
        }
        Ok(())
    }

    pub fn delete_param(&mut self, name: &str) {
        for point in &mut self.points {
            point.delete_params(&[name]);
        }
    }

    /// One entry per point, `None` where the point lacks `name`. Returns
    /// `None` if no point has it at all.
    pub fn get_param(&self, name: &str) -> Option<Vec<Option<Value>>> {
        if !self.param_exists_on_any_point(name) {
            return None;
        }
        Some(self.points.iter().map(|p| p.get_param(name)).collect())
    }

    pub fn param_exists_on_any_point(&self, name: &str) -> bool {
        self.points.iter().any(|p| p.param_exists(name))
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|p| geo::coord! { x: p.lng(), y: p.lat() })
            .collect()
    }
}
