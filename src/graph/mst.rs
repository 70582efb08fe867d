//! Minimum spanning tree construction.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::models::Edge;

/// Builds a minimum spanning tree over the complete graph of all points.
///
/// Prim's algorithm starting at vertex 0: `key[v]` holds the best known
/// connection cost into the growing tree, `parent[v]` the vertex providing
/// it. Each round the unvisited vertex with minimum key is selected by a
/// linear scan — ties go to the lowest index — then its neighbors' keys are
/// relaxed with direct distances. O(n²), which is the right shape for a
/// complete graph.
///
/// Returns n−1 edges for n ≥ 1, an empty set otherwise. Output is
/// deterministic for a fixed input order.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::distance::DistanceMatrix;
/// use planar_tsp::graph::minimum_spanning_tree;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// let mst = minimum_spanning_tree(&dm);
/// assert_eq!(mst.len(), 2);
/// ```
pub fn minimum_spanning_tree(dm: &DistanceMatrix) -> Vec<Edge> {
    let n = dm.size();
    if n <= 1 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![usize::MAX; n];
    key[0] = 0.0;

    for _ in 0..n {
        // Lowest index wins key ties via strict less-than.
        let mut u = usize::MAX;
        let mut min_key = f64::INFINITY;
        for v in 0..n {
            if !visited[v] && key[v] < min_key {
                min_key = key[v];
                u = v;
            }
        }

        visited[u] = true;

        for v in 0..n {
            let d = dm.get(u, v);
            if !visited[v] && d < key[v] {
                key[v] = d;
                parent[v] = u;
            }
        }
    }

    let edges: Vec<Edge> = (1..n)
        .map(|v| Edge::new(parent[v], v, dm.get(parent[v], v)))
        .collect();
    debug!("mst: {} vertices, {} edges", n, edges.len());
    edges
}

/// Summed weight of an edge set.
///
/// The MST total is a lower bound on any Hamiltonian tour over the same
/// points, which makes this useful for sanity-checking heuristic output.
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}
