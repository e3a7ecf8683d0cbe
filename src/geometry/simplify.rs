use tracing::debug;

use super::coordinate::LatLng;
use super::distance::p2l;
use crate::error::{GeoError, Result};

/// Output of [`simplify_path`]
#[derive(Debug, Clone, PartialEq)]
pub struct Simplified<T> {
    /// Surviving input items, in their original order
    pub points: Vec<T>,
    /// `points.len() / input.len()`, rounded to 3 decimal places
    pub ratio: f64,
}

/// Indices of the points that survive perpendicular-distance thinning.
///
/// # Algorithm
/// 1. Start with every index retained.
/// 2. Walk the retained list with a cursor `i`. For the triple at
///    `i, i+1, i+2`, measure the cross-track distance of the middle point
///    from the chord joining its neighbours.
/// 3. If it is below `tolerance`, drop the middle index. The cursor moves
///    on by one either way, so the next triple is anchored on the point
///    that has just become the new neighbour.
/// 4. Repeat whole passes until one removes nothing.
///
/// First and last indices are never removed. A tolerance of 0 removes
/// nothing because `|d| < 0` never holds.
pub fn simplify_indices<T: LatLng>(points: &[T], tolerance: f64) -> Result<Vec<usize>> {
    check_tolerance(tolerance)?;

    let mut retained: Vec<usize> = (0..points.len()).collect();
    let mut pass = 0;

    loop {
        pass += 1;
        let before = retained.len();
        let mut i = 0;

        while i + 2 < retained.len() {
            let d = p2l(
                &points[retained[i]],
                &points[retained[i + 2]],
                &points[retained[i + 1]],
            );
            if d.abs() < tolerance {
                retained.remove(i + 1);
            }
            i += 1;
        }

        let removed = before - retained.len();
        debug!(pass, removed, remaining = retained.len(), "simplify pass");

        if removed == 0 {
            break;
        }
    }

    Ok(retained)
}

/// Simplify a coordinate sequence, returning references to the surviving
/// items and the compression ratio.
pub fn simplify_path<T: LatLng>(points: &[T], tolerance: f64) -> Result<Simplified<&T>> {
    let retained = simplify_indices(points, tolerance)?;
    let ratio = compression_ratio(retained.len(), points.len());

    Ok(Simplified {
        points: retained.into_iter().map(|i| &points[i]).collect(),
        ratio,
    })
}

/// `kept / original`, rounded to 3 decimal places. Empty input counts as 1.0.
pub fn compression_ratio(kept: usize, original: usize) -> f64 {
    if original == 0 {
        return 1.0;
    }
    (kept as f64 / original as f64 * 1000.0).round() / 1000.0
}

fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_nan() {
        return Err(GeoError::not_a_number(tolerance));
    }
    if tolerance < 0.0 {
        return Err(GeoError::InvalidArgument(format!(
            "Tolerance must be non-negative, got {}",
            tolerance
        )));
    }
    Ok(())
}
