use geopath::geometry::{
    BoundingBox, Coordinate, LatLng, bearing, bearing_degrees, bounding_box, degrees_to_radians,
    is_point_in_box, p2l, p2p, radians_to_degrees, simplify_indices, simplify_path,
};
use geopath::{Path, Point};

const TRACK: [(f64, f64); 20] = [
    (51.2194, -3.94915),
    (51.21932, -3.94935),
    (51.21919, -3.94989),
    (51.21905, -3.95032),
    (51.219, -3.95043),
    (51.21893, -3.95052),
    (51.21856, -3.95088),
    (51.21835, -3.95112),
    (51.21825, -3.95132),
    (51.21819, -3.95147),
    (51.21804, -3.95236),
    (51.21804, -3.95255),
    (51.21808, -3.953),
    (51.2181, -3.95338),
    (51.21808, -3.95372),
    (51.21795, -3.95445),
    (51.21794, -3.95477),
    (51.2179, -3.95511),
    (51.21774, -3.95564),
    (51.21769, -3.95615),
];

fn track() -> Vec<Coordinate> {
    TRACK
        .iter()
        .map(|&(lat, lng)| Coordinate::new(lat, lng))
        .collect()
}

#[test]
fn test_reference_distances() {
    let p1 = Coordinate::new(51.2194, -3.94915);
    let p2 = Coordinate::new(51.2192, -3.94935);
    let p3 = Coordinate::new(51.2392, -3.95935);

    assert_eq!(format!("{:.8}", p2p(&p1, &p2)), "26.27048822");
    assert_eq!(format!("{:.8}", p2l(&p1, &p3, &p2)), "-20.10546438");
    assert_eq!(format!("{:.8}", bearing(&p1, &p3)), "-0.31198170");
    assert_eq!(format!("{:.8}", bearing_degrees(&p1, &p3)), "342.12476538");
}

#[test]
fn test_attributed_points_and_coordinates_mix() {
    let p1 = Point::new(51.2194, -3.94915).unwrap();
    let p2 = Coordinate::new(51.2192, -3.94935);
    let p2_pair = [-3.94935, 51.2192];
    assert_eq!(p2p(&p1, &p2), p2p(&p1, &p2_pair));
}

#[test]
fn test_reference_simplification() {
    let points = track();
    let result = simplify_path(&points, 5.0).unwrap();

    let kept: Vec<(f64, f64)> = result.points.iter().map(|p| (p.lat(), p.lng())).collect();
    assert_eq!(
        kept,
        vec![
            (51.2194, -3.94915),
            (51.219, -3.95043),
            (51.21825, -3.95132),
            (51.21804, -3.95236),
            (51.21808, -3.95372),
            (51.21769, -3.95615),
        ]
    );
    assert_eq!(result.ratio, 0.3);
}

#[test]
fn test_simplification_at_other_tolerances() {
    let points = track();
    assert_eq!(
        simplify_indices(&points, 2.0).unwrap(),
        vec![0, 1, 2, 4, 7, 9, 10, 13, 14, 15, 17, 18, 19]
    );
    assert_eq!(
        simplify_indices(&points, 10.0).unwrap(),
        vec![0, 4, 8, 10, 14, 19]
    );
    assert_eq!(simplify_indices(&points, 20.0).unwrap(), vec![0, 4, 8, 19]);
    assert_eq!(simplify_indices(&points, 50.0).unwrap(), vec![0, 8, 19]);
}

#[test]
fn test_zero_tolerance_is_identity() {
    let points = track();
    let result = simplify_path(&points, 0.0).unwrap();
    assert_eq!(result.points.len(), points.len());
    assert!(result.points.iter().zip(&points).all(|(a, b)| *a == b));
    assert_eq!(result.ratio, 1.0);
}

#[test]
fn test_endpoints_preserved_and_monotonic() {
    let points = track();
    let mut previous_len = usize::MAX;

    for tolerance in [0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 1000.0] {
        let idx = simplify_indices(&points, tolerance).unwrap();
        assert_eq!(idx.first(), Some(&0));
        assert_eq!(idx.last(), Some(&(points.len() - 1)));
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert!(idx.len() <= previous_len, "tolerance {}", tolerance);
        previous_len = idx.len();
    }
}

#[test]
fn test_path_simplify_matches_free_function() {
    let mut path = Path::from_coordinates(&track()).unwrap();
    path.simplify(5.0).unwrap();

    assert_eq!(path.len(), 6);
    assert_eq!(path.simplification_ratio(), 0.3);
    assert_eq!(path.first_point().lat(), 51.2194);
    assert_eq!(path.last_point().lng(), -3.95615);
}

#[test]
fn test_symmetry_and_identity() {
    let points = track();
    for a in &points {
        assert_eq!(p2p(a, a), 0.0);
        for b in &points {
            assert!((p2p(a, b) - p2p(b, a)).abs() < 1e-9);
            assert_eq!(p2l(a, b, a), 0.0);
        }
    }
}

#[test]
fn test_bounding_box_contains_inputs() {
    let points = track();
    let bbox = bounding_box(&points);
    assert!(points.iter().all(|p| is_point_in_box(p, &bbox)));
}

#[test]
fn test_point_in_box_reference() {
    let bbox = BoundingBox {
        min_lat: 51.0,
        max_lat: 52.0,
        min_lng: -1.0,
        max_lng: 0.0,
    };
    assert!(!is_point_in_box(&Coordinate::new(50.9999, -0.5), &bbox));
    assert!(is_point_in_box(&Coordinate::new(51.0, -0.5), &bbox));
}

#[test]
fn test_unit_round_trip() {
    for x in [-359.5, -90.0, -0.001, 0.0, 17.875234620136624, 180.0, 721.25] {
        assert!((radians_to_degrees(degrees_to_radians(x)) - x).abs() < 1e-10);
    }
}
