use super::coordinate::LatLng;
use super::units::{degrees_to_radians, to_compass_degrees};

/// Initial bearing from `start` to `end` in radians.
///
/// Measured clockwise from north, in (-PI, PI]. Coincident points give 0.
pub fn bearing(start: &impl LatLng, end: &impl LatLng) -> f64 {
    let lat1 = degrees_to_radians(start.lat());
    let lat2 = degrees_to_radians(end.lat());
    let dlng = degrees_to_radians(end.lng()) - degrees_to_radians(start.lng());

    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    let y = dlng.sin() * lat2.cos();

    y.atan2(x)
}

/// Initial bearing as a compass heading in [0, 360)
pub fn bearing_degrees(start: &impl LatLng, end: &impl LatLng) -> f64 {
    to_compass_degrees(bearing(start, end))
}
