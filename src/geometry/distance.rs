use super::bearing::bearing;
use super::coordinate::LatLng;
use super::units::degrees_to_radians;

/// Earth radius used by every spherical formula here, in km
pub const EARTH_RADIUS_KM: f64 = 6378.137;
/// Earth radius in meters
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Great-circle distance in meters between two coordinates (Haversine)
pub fn p2p(a: &impl LatLng, b: &impl LatLng) -> f64 {
    let lat1 = degrees_to_radians(a.lat());
    let lat2 = degrees_to_radians(b.lat());
    let lng1 = degrees_to_radians(a.lng());
    let lng2 = degrees_to_radians(b.lng());

    let dlat = lat1 - lat2;
    let dlng = lng1 - lng2;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    c * EARTH_RADIUS_KM * 1000.0
}

/// Signed cross-track distance in meters of `point` from the great circle
/// through `start` and `end`.
///
/// The sign tells which side of the line `point` falls on.
pub fn p2l(start: &impl LatLng, end: &impl LatLng, point: &impl LatLng) -> f64 {
    let d13 = p2p(start, point) / 1000.0;
    let brg12 = bearing(start, end);
    let brg13 = bearing(start, point);

    ((d13 / EARTH_RADIUS_KM).sin() * (brg13 - brg12).sin()).asin() * EARTH_RADIUS_KM * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;

    fn p1() -> Coordinate {
        Coordinate::new(51.2194, -3.94915)
    }

    fn p2() -> Coordinate {
        Coordinate::new(51.2192, -3.94935)
    }

    fn p3() -> Coordinate {
        Coordinate::new(51.2392, -3.95935)
    }

    #[test]
    fn test_p2p_reference() {
        assert!((p2p(&p1(), &p2()) - 26.27048822).abs() < 1e-8);
    }

    #[test]
    fn test_p2p_symmetric() {
        assert!((p2p(&p1(), &p3()) - p2p(&p3(), &p1())).abs() < 1e-9);
        assert!((p2p(&p2(), &p3()) - p2p(&p3(), &p2())).abs() < 1e-9);
    }

    #[test]
    fn test_p2p_identity() {
        assert_eq!(p2p(&p1(), &p1()), 0.0);
    }

    #[test]
    fn test_p2p_mixed_types() {
        let pair = [-3.94935, 51.2192];
        let geo_point = geo::Point::new(-3.94935, 51.2192);
        let expected = p2p(&p1(), &p2());
        assert_eq!(p2p(&p1(), &pair), expected);
        assert_eq!(p2p(&p1(), &geo_point), expected);
    }

    #[test]
    fn test_p2p_antipodal_is_finite() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = p2p(&a, &b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-3);
    }

    #[test]
    fn test_p2l_reference() {
        assert!((p2l(&p1(), &p3(), &p2()) - -20.10546438).abs() < 1e-8);
    }

    #[test]
    fn test_p2l_sign_depends_on_side() {
        let forward = p2l(&p1(), &p3(), &p2());
        let point_on_other_side = Coordinate::new(51.2196, -3.94895);
        assert!(forward < 0.0);
        assert!(p2l(&p1(), &p3(), &point_on_other_side) > 0.0);
    }

    #[test]
    fn test_p2l_point_at_start() {
        assert_eq!(p2l(&p1(), &p2(), &p1()), 0.0);
    }
}
