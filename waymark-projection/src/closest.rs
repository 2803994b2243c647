//! Nearest-point lookup in degree space.

use geo::Coord;
use waymark_core::euclidean_distance;

/// Return the index of the point nearest to `target`.
///
/// Distance is planar in degrees, which is adequate for picking the closest
/// vertex of a route under a tap. The first index wins ties, and points with
/// a `NaN` distance are never chosen. Returns `None` when `points` is empty
/// or no distance is comparable.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_projection::find_closest;
///
/// let route = [
///     Coord { x: 24.0, y: 60.0 },
///     Coord { x: 25.0, y: 61.0 },
///     Coord { x: 26.0, y: 62.0 },
/// ];
/// assert_eq!(find_closest(&route, Coord { x: 26.0, y: 60.0 }), Some(1));
/// ```
#[must_use]
pub fn find_closest(points: &[Coord<f64>], target: Coord<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let distance = euclidean_distance(*point, target);
        if distance.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((index, distance));
        }
    }
    log::trace!("closest of {} points to {target:?}: {best:?}", points.len());
    best.map(|(index, _)| index)
}
