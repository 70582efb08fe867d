//! Tour (closed visiting order) type.

use serde::{Deserialize, Serialize};

use super::Point;

/// An ordered visiting sequence over a point set, interpreted as a closed
/// cycle: the last point implicitly connects back to the first.
///
/// The tour stores point indices, not coordinates. A valid tour produced by
/// any solver in this crate is Hamiltonian: it contains every input index
/// exactly once.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ];
/// let tour = Tour::new(vec![0, 1, 2, 3]);
/// assert!(tour.is_permutation(points.len()));
/// assert!((tour.length(&points) - 14.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order of point indices.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Creates an empty tour.
    pub fn empty() -> Self {
        Self { order: Vec::new() }
    }

    /// The visiting order as point indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the visiting order into the actual points.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for `points`.
    pub fn points(&self, points: &[Point]) -> Vec<Point> {
        self.order.iter().map(|&i| points[i]).collect()
    }

    /// Total cycle length: consecutive distances plus the closing edge.
    ///
    /// Empty and single-point tours have length zero.
    pub fn length(&self, points: &[Point]) -> f64 {
        crate::geometry::tour_length(&self.points(points))
    }

    /// Returns `true` if the tour visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let t = Tour::empty();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.is_permutation(0));
        assert_eq!(t.length(&[]), 0.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Tour::new(vec![2, 0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 1, 3]).is_permutation(3));
    }

    #[test]
    fn test_length_closes_the_loop() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let t = Tour::new(vec![0, 1, 2]);
        // 1 + 1 + sqrt(2)
        assert!((t.length(&points) - (2.0 + 2.0_f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_length_single_point() {
        let points = vec![Point::new(5.0, 5.0)];
        assert_eq!(Tour::new(vec![0]).length(&points), 0.0);
    }

    #[test]
    fn test_points_resolution() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let t = Tour::new(vec![1, 0]);
        assert_eq!(t.points(&points), vec![points[1], points[0]]);
    }
}
