use std::f64::consts::PI;

/// Exact double-precision value of PI / 180
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Convert an angle in radians to a compass heading in [0, 360)
pub fn to_compass_degrees(radians: f64) -> f64 {
    let degrees = radians_to_degrees(radians).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Convert an angle in radians to signed degrees in (-180, 180]
pub fn to_signed_degrees(radians: f64) -> f64 {
    let degrees = to_compass_degrees(radians);
    if degrees > 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}
