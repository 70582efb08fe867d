//! Constructive tour heuristics.
//!
//! - [`nearest_neighbor`] — greedy nearest-unvisited construction, O(n²)
//! - [`christofides`] — MST + greedy odd-vertex matching + Eulerian
//!   shortcutting, polynomial time
//!
//! Both are approximate: fast, deterministic, no optimality guarantee.

mod christofides;
mod nearest_neighbor;

pub use christofides::christofides;
pub use nearest_neighbor::nearest_neighbor;
