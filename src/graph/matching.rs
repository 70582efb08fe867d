//! Odd-degree vertex matching.
//!
//! Adding a matching over the odd-degree vertices of an edge set makes
//! every vertex degree even, which is the precondition for an Eulerian
//! circuit. The pairing here is greedy nearest-available, not an exact
//! minimum-weight perfect matching: a deliberate policy trade of matching
//! quality for simplicity. Consumers must not rely on the textbook 3/2
//! Christofides bound, which requires exact matching.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::models::Edge;

/// Degree of each vertex under the given edge set.
pub fn vertex_degrees(n: usize, edges: &[Edge]) -> Vec<usize> {
    let mut degree = vec![0usize; n];
    for e in edges {
        degree[e.u()] += 1;
        degree[e.v()] += 1;
    }
    degree
}

/// Indices of vertices with odd degree under the given edge set.
///
/// The handshake lemma guarantees the result has even length for any edge
/// set: the degree sum is twice the edge count, so odd entries pair up.
pub fn odd_degree_vertices(n: usize, edges: &[Edge]) -> Vec<usize> {
    vertex_degrees(n, edges)
        .iter()
        .enumerate()
        .filter(|(_, &d)| d % 2 == 1)
        .map(|(v, _)| v)
        .collect()
}

/// Greedily pairs the given vertices by nearest-neighbor distance.
///
/// Repeatedly takes the last unpaired vertex and matches it with the
/// nearest remaining unpaired vertex (linear scan, first-found minimum).
/// With an even number of input vertices — always the case for odd-degree
/// vertices of a graph — every vertex ends up in exactly one pair.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::distance::DistanceMatrix;
/// use planar_tsp::graph::greedy_matching;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(11.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// let matching = greedy_matching(&[0, 1, 2, 3], &dm);
/// assert_eq!(matching.len(), 2);
/// ```
pub fn greedy_matching(vertices: &[usize], dm: &DistanceMatrix) -> Vec<Edge> {
    let mut remaining = vertices.to_vec();
    let mut matching = Vec::with_capacity(remaining.len() / 2);

    while let Some(u) = remaining.pop() {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &v) in remaining.iter().enumerate() {
            let d = dm.get(u, v);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((pos, d));
            }
        }
        match best {
            Some((pos, d)) => {
                let v = remaining.remove(pos);
                matching.push(Edge::new(u, v, d));
            }
            // Lone leftover: no partner to pair with. Cannot happen when
            // the input is the odd-degree set of a graph.
            None => break,
        }
    }

    debug!(
        "greedy matching: {} vertices paired into {} edges",
        vertices.len(),
        matching.len()
    );
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::minimum_spanning_tree;
    use crate::models::Point;

    #[test]
    fn test_degrees() {
        let edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
        assert_eq!(vertex_degrees(3, &edges), vec![1, 2, 1]);
    }

    #[test]
    fn test_odd_vertices_of_a_path() {
        // A path graph: only the two endpoints are odd.
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 3, 1.0),
        ];
        assert_eq!(odd_degree_vertices(4, &edges), vec![0, 3]);
    }

    #[test]
    fn test_odd_count_always_even_for_mst() {
        // Handshake lemma, exercised through the MST builder.
        let clouds: Vec<Vec<Point>> = vec![
            (0..5).map(|i| Point::new(i as f64, 0.0)).collect(),
            (0..8)
                .map(|i| Point::new((i * 3 % 7) as f64, (i * 5 % 11) as f64))
                .collect(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 7.0),
                Point::new(5.0, 1.0),
                Point::new(9.0, 9.0),
                Point::new(4.0, 4.0),
                Point::new(8.0, 0.0),
                Point::new(1.0, 6.0),
            ],
        ];
        for points in clouds {
            let dm = DistanceMatrix::from_points(&points).expect("finite");
            let mst = minimum_spanning_tree(&dm);
            let odd = odd_degree_vertices(points.len(), &mst);
            assert_eq!(odd.len() % 2, 0, "odd-degree count must be even");
        }
    }

    #[test]
    fn test_matching_pairs_everyone() {
        let points: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        let dm = DistanceMatrix::from_points(&points).expect("finite");
        let matching = greedy_matching(&[0, 1, 2, 3, 4, 5], &dm);
        assert_eq!(matching.len(), 3);

        let mut seen = vec![false; 6];
        for e in &matching {
            assert!(!seen[e.u()] && !seen[e.v()], "vertex matched twice");
            seen[e.u()] = true;
            seen[e.v()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_matching_prefers_near_pairs() {
        // Two tight clusters far apart: greedy pairing stays in-cluster.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(101.0, 0.0),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("finite");
        let matching = greedy_matching(&[0, 1, 2, 3], &dm);
        for e in &matching {
            assert!(e.weight() < 2.0, "matched across clusters: {:?}", e);
        }
    }

    #[test]
    fn test_matching_makes_degrees_even() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 5.0),
            Point::new(7.0, 3.0),
            Point::new(5.0, 8.0),
            Point::new(9.0, 6.0),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("finite");
        let mut edges = minimum_spanning_tree(&dm);
        let odd = odd_degree_vertices(points.len(), &edges);
        edges.extend(greedy_matching(&odd, &dm));
        for d in vertex_degrees(points.len(), &edges) {
            assert_eq!(d % 2, 0);
        }
    }

    #[test]
    fn test_empty_matching() {
        let dm = DistanceMatrix::from_points(&[]).expect("empty");
        assert!(greedy_matching(&[], &dm).is_empty());
    }
}
