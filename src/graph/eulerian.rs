//! Eulerian circuit extraction.

use crate::models::Edge;

/// Extracts an Eulerian circuit from a multigraph given as an edge list.
///
/// Hierholzer's algorithm with an explicit stack: starting at vertex 0,
/// follow unused edges, removing each from both endpoints' adjacency lists;
/// when the stack top runs out of edges, pop it onto the circuit. The
/// circuit is reversed at the end so it reads in traversal order.
///
/// The edge list is treated as a multigraph — the same vertex pair may
/// occur several times (an MST edge duplicated by the matching contributes
/// two traversable edges) and is never simplified. A circuit visiting every
/// edge exactly once exists provided the graph is connected and every
/// vertex has even degree; the MST ∪ matching construction guarantees both.
///
/// Returns an empty sequence for an empty vertex set, and `[0]` for a
/// vertex set with no edges.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Edge;
/// use planar_tsp::graph::eulerian_circuit;
///
/// // Triangle: 0-1-2-0.
/// let edges = vec![
///     Edge::new(0, 1, 1.0),
///     Edge::new(1, 2, 1.0),
///     Edge::new(2, 0, 1.0),
/// ];
/// let circuit = eulerian_circuit(3, &edges);
/// assert_eq!(circuit.len(), 4);
/// assert_eq!(circuit[0], 0);
/// assert_eq!(circuit[3], 0);
/// ```
pub fn eulerian_circuit(n: usize, edges: &[Edge]) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in edges {
        adj[e.u()].push(e.v());
        adj[e.v()].push(e.u());
    }

    let mut stack = vec![0usize];
    let mut circuit = Vec::with_capacity(edges.len() + 1);

    while let Some(&v) = stack.last() {
        match adj[v].pop() {
            Some(u) => {
                // Remove the reverse entry so the edge is used only once.
                let pos = adj[u]
                    .iter()
                    .position(|&w| w == v)
                    .expect("multigraph adjacency out of sync");
                adj[u].remove(pos);
                stack.push(u);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }

    circuit.reverse();
    circuit
}
