//! Weighted graph edge over point indices.

use serde::{Deserialize, Serialize};

/// An undirected edge between two points, identified by their indices in
/// the input slice, with the Euclidean distance cached as its weight.
///
/// Edges are the unit of output for the MST builder and the odd-degree
/// matching, and the unit of input for the Eulerian circuit extractor.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Edge;
///
/// let e = Edge::new(3, 1, 2.5);
/// assert_eq!(e.endpoints(), (3, 1));
/// assert_eq!(e.weight(), 2.5);
/// assert!(e.connects(1) && e.connects(3) && !e.connects(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    u: usize,
    v: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between vertices `u` and `v` with the given weight.
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// First endpoint.
    pub fn u(&self) -> usize {
        self.u
    }

    /// Second endpoint.
    pub fn v(&self) -> usize {
        self.v
    }

    /// Both endpoints, in stored order.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Edge weight (Euclidean distance between the endpoints).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if the given vertex is one of the endpoints.
    pub fn connects(&self, vertex: usize) -> bool {
        self.u == vertex || self.v == vertex
    }
}
