//! Euclidean geometry primitives.
//!
//! - [`distance`] — Euclidean distance between two points
//! - [`tour_length`] — total length of a closed tour over a point sequence

use crate::models::Point;

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Total length of the closed tour visiting `points` in order.
///
/// Sums the consecutive distances plus the closing edge from the last point
/// back to the first. Empty and single-point sequences yield zero.
///
/// # Examples
///
/// ```
/// use planar_tsp::geometry::tour_length;
/// use planar_tsp::models::Point;
///
/// let rectangle = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ];
/// assert!((tour_length(&rectangle) - 14.0).abs() < 1e-10);
/// assert_eq!(tour_length(&[]), 0.0);
/// ```
pub fn tour_length(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += pair[0].distance_to(&pair[1]);
    }
    total + points[points.len() - 1].distance_to(&points[0])
}
