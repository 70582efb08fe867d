//! Dense distance matrix.

use crate::error::SolveError;
use crate::models::Point;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Computed once per solve call and never mutated afterwards: symmetric,
/// with a zero diagonal. Construction is the single validation choke point
/// for every solver — non-finite coordinates are rejected here, before any
/// distance is taken.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a distance matrix from point coordinates.
    ///
    /// Returns [`SolveError::InvalidInput`] naming the first point with a
    /// NaN or infinite coordinate.
    pub fn from_points(points: &[Point]) -> Result<Self, SolveError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SolveError::InvalidInput { index });
        }
        let n = points.len();
        let mut dm = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance between points `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
