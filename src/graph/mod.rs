//! The shared graph backbone: MST, odd-degree matching, Eulerian circuits.
//!
//! - [`minimum_spanning_tree`] — Prim's algorithm over the complete graph, O(n²)
//! - [`total_weight`] — summed weight of an edge set
//! - [`vertex_degrees`] / [`odd_degree_vertices`] — degree bookkeeping
//! - [`greedy_matching`] — nearest-available pairing of odd-degree vertices
//! - [`eulerian_circuit`] — Hierholzer's algorithm over a multigraph
//!
//! All functions identify vertices by their index in the original point
//! slice and are pure over their inputs.

mod eulerian;
mod matching;
mod mst;

pub use eulerian::eulerian_circuit;
pub use matching::{greedy_matching, odd_degree_vertices, vertex_degrees};
pub use mst::{minimum_spanning_tree, total_weight};
