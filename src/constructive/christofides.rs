//! Christofides-style constructive heuristic.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::graph::{eulerian_circuit, greedy_matching, minimum_spanning_tree, odd_degree_vertices};
use crate::models::{Point, Tour};

/// Constructs a tour in the style of Christofides' algorithm.
///
/// Pipeline: build the MST, pair its odd-degree vertices with a greedy
/// nearest-available matching, extract an Eulerian circuit from the
/// combined multigraph, then shortcut the circuit to a Hamiltonian tour by
/// keeping only the first visit to each vertex.
///
/// The odd-vertex pairing is greedy, not an exact minimum-weight perfect
/// matching, so the textbook 3/2 approximation bound does not apply; in
/// practice tours land well under 2× optimal. The MST total weight remains
/// a valid lower bound on the result.
///
/// Inputs with fewer than three points yield the trivial tour.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if any coordinate is non-finite.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::constructive::christofides;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ];
/// let tour = christofides(&points)?;
/// assert!(tour.is_permutation(points.len()));
/// # Ok::<(), planar_tsp::SolveError>(())
/// ```
pub fn christofides(points: &[Point]) -> Result<Tour, SolveError> {
    let dm = DistanceMatrix::from_points(points)?;
    let n = dm.size();
    if n <= 2 {
        return Ok(Tour::new((0..n).collect()));
    }

    let mut edges = minimum_spanning_tree(&dm);
    let odd = odd_degree_vertices(n, &edges);
    debug!("christofides: {} odd-degree vertices", odd.len());
    edges.extend(greedy_matching(&odd, &dm));

    let circuit = eulerian_circuit(n, &edges);

    // Shortcut: emit each vertex the first time the walk reaches it.
    let mut seen = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for v in circuit {
        if !seen[v] {
            seen[v] = true;
            order.push(v);
        }
    }

    Ok(Tour::new(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::total_weight;

    #[test]
    fn test_empty() {
        let tour = christofides(&[]).expect("ok");
        assert!(tour.is_empty());
    }

    #[test]
    fn test_single_point() {
        let points = vec![Point::new(0.0, 0.0)];
        let tour = christofides(&points).expect("ok");
        assert_eq!(tour.order(), &[0]);
        assert_eq!(tour.length(&points), 0.0);
    }

    #[test]
    fn test_two_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let tour = christofides(&points).expect("ok");
        assert_eq!(tour.order(), &[0, 1]);
    }

    #[test]
    fn test_is_hamiltonian() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 5.0),
            Point::new(7.0, 3.0),
            Point::new(5.0, 8.0),
            Point::new(9.0, 6.0),
            Point::new(3.0, 2.0),
        ];
        let tour = christofides(&points).expect("ok");
        assert!(tour.is_permutation(points.len()));
    }

    #[test]
    fn test_mst_lower_bounds_tour() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 7.0),
            Point::new(8.0, 2.0),
            Point::new(6.0, 9.0),
            Point::new(1.0, 4.0),
            Point::new(9.0, 5.0),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("finite");
        let mst_weight = total_weight(&minimum_spanning_tree(&dm));
        let tour = christofides(&points).expect("ok");
        assert!(tour.length(&points) >= mst_weight - 1e-9);
    }

    #[test]
    fn test_duplicate_coordinates() {
        // Index identity keeps duplicates distinct in the tour.
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(4.0, 1.0),
            Point::new(4.0, 5.0),
        ];
        let tour = christofides(&points).expect("ok");
        assert!(tour.is_permutation(points.len()));
    }

    #[test]
    fn test_rejects_non_finite() {
        let points = vec![Point::new(f64::INFINITY, 0.0)];
        assert_eq!(
            christofides(&points).unwrap_err(),
            SolveError::InvalidInput { index: 0 }
        );
    }

    #[test]
    fn test_deterministic() {
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new((i * 13 % 7) as f64, (i * 11 % 5) as f64))
            .collect();
        let a = christofides(&points).expect("ok");
        let b = christofides(&points).expect("ok");
        assert_eq!(a, b);
    }
}
