use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{GeoError, Result};
use crate::geometry::LatLng;
use crate::geometry::coordinate::number_from_json;

const LAT: &str = "lat";
const LNG: &str = "lng";

/// A coordinate plus arbitrary named attributes (elevation, heart rate, ...).
///
/// Attributes are write-once: adding a key that already exists is silently
/// ignored, so delete first to update. `lat` and `lng` can only change
/// through their setters and can never be deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    lat: f64,
    lng: f64,
    params: Map<String, Value>,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        check_lat(lat)?;
        check_lng(lng)?;
        Ok(Self {
            lat,
            lng,
            params: Map::new(),
        })
    }

    /// Build from a `[lng, lat]` pair
    pub fn from_lng_lat(lng_lat: [f64; 2]) -> Result<Self> {
        Self::new(lng_lat[1], lng_lat[0])
    }

    /// Build from a JSON object that must contain `lat` and `lng`; every
    /// other key becomes an attribute. A `[lng, lat]` array is also accepted.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(pair) if pair.len() == 2 => {
                Self::from_lng_lat([number_from_json(&pair[0])?, number_from_json(&pair[1])?])
            }
            Value::Array(_) => Err(GeoError::InvalidArgument(
                "lnglat needs to be an array of length 2".to_string(),
            )),
            Value::Object(map) => {
                let lat = map
                    .get(LAT)
                    .ok_or_else(|| GeoError::InvalidArgument("Lat parameter missing".to_string()))?;
                let lng = map
                    .get(LNG)
                    .ok_or_else(|| GeoError::InvalidArgument("Lng parameter missing".to_string()))?;

                let mut point = Self::new(number_from_json(lat)?, number_from_json(lng)?)?;
                point.add_params(map.clone());
                Ok(point)
            }
            _ => Err(GeoError::InvalidArgument(
                "params should be an object".to_string(),
            )),
        }
    }

    pub fn set_lat(&mut self, lat: f64) -> Result<()> {
        check_lat(lat)?;
        self.lat = lat;
        Ok(())
    }

    pub fn set_lng(&mut self, lng: f64) -> Result<()> {
        check_lng(lng)?;
        self.lng = lng;
        Ok(())
    }

    /// Set both coordinates from a `[lng, lat]` pair. Neither changes unless
    /// both are valid.
    pub fn set_lng_lat(&mut self, lng_lat: [f64; 2]) -> Result<()> {
        check_lng(lng_lat[0])?;
        check_lat(lng_lat[1])?;
        self.lng = lng_lat[0];
        self.lat = lng_lat[1];
        Ok(())
    }

    /// Add attributes, skipping any key that already exists
    pub fn add_params(&mut self, params: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in params {
            if !self.param_exists(&key) {
                self.params.insert(key, value);
            }
        }
    }

    pub fn add_param(&mut self, key: impl Into<String>, value: Value) {
        self.add_params([(key.into(), value)]);
    }

    /// Remove attributes. Unknown keys and `lat`/`lng` are ignored.
    pub fn delete_params<S: AsRef<str>>(&mut self, keys: &[S]) {
        for key in keys {
            self.params.remove(key.as_ref());
        }
    }

    /// Values for each requested key that exists, including `lat`/`lng`
    pub fn get_params<S: AsRef<str>>(&self, keys: &[S]) -> Map<String, Value> {
        keys.iter()
            .filter_map(|key| {
                let key = key.as_ref();
                self.get_param(key).map(|v| (key.to_string(), v))
            })
            .collect()
    }

    pub fn get_param(&self, key: &str) -> Option<Value> {
        match key {
            LAT => Some(Value::from(self.lat)),
            LNG => Some(Value::from(self.lng)),
            _ => self.params.get(key).cloned(),
        }
    }

    pub fn param_exists(&self, key: &str) -> bool {
        key == LAT || key == LNG || self.params.contains_key(key)
    }

    /// Attribute names other than `lat`/`lng`
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl LatLng for Point {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.params.len() + 2))?;
        map.serialize_entry(LAT, &self.lat)?;
        map.serialize_entry(LNG, &self.lng)?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn check_lat(lat: f64) -> Result<()> {
    if lat.is_nan() {
        return Err(GeoError::InvalidArgument("Lat is NaN".to_string()));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeoError::Range(format!("Lat value {} out of bounds", lat)));
    }
    Ok(())
}

fn check_lng(lng: f64) -> Result<()> {
    if lng.is_nan() {
        return Err(GeoError::InvalidArgument("Lng is NaN".to_string()));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeoError::Range(format!("Lng value {} out of bounds", lng)));
    }
    Ok(())
}
