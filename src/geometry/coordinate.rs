use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GeoError, Result};

/// Anything exposing a latitude and longitude in decimal degrees.
///
/// Every geo function in this crate is generic over this trait, so plain
/// coordinates, `[lng, lat]` pairs, `geo` types and attributed points can
/// be mixed freely.
pub trait LatLng {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

/// `[lng, lat]`, the GeoJSON position order
impl LatLng for [f64; 2] {
    fn lat(&self) -> f64 {
        self[1]
    }

    fn lng(&self) -> f64 {
        self[0]
    }
}

impl LatLng for geo::Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }

    fn lng(&self) -> f64 {
        self.x
    }
}

impl LatLng for geo::Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }

    fn lng(&self) -> f64 {
        self.x()
    }
}

/// A bare coordinate pair with no attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn of(point: &impl LatLng) -> Self {
        Self::new(point.lat(), point.lng())
    }

    /// Read a coordinate from a loosely-typed JSON value.
    ///
    /// Accepts `{lat, lng}`, `{latitude, longitude}` or a `[lng, lat]`
    /// array. Numeric strings are coerced. Range is not checked here.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(pair) if pair.len() == 2 => {
                let lng = number_from_json(&pair[0])?;
                let lat = number_from_json(&pair[1])?;
                Ok(Self::new(lat, lng))
            }
            Value::Object(map) => {
                let lat = map.get("lat").or_else(|| map.get("latitude"));
                let lng = map.get("lng").or_else(|| map.get("longitude"));
                match (lat, lng) {
                    (Some(lat), Some(lng)) => {
                        Ok(Self::new(number_from_json(lat)?, number_from_json(lng)?))
                    }
                    _ => Err(GeoError::not_point_like()),
                }
            }
            _ => Err(GeoError::not_point_like()),
        }
    }
}

impl LatLng for Coordinate {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::coord! { x: c.lng, y: c.lat }
    }
}

/// Coerce a JSON number or numeric string to `f64`
pub fn number_from_json(value: &Value) -> Result<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match n {
        Some(n) if !n.is_nan() => Ok(n),
        _ => Err(GeoError::not_a_number(value)),
    }
}
