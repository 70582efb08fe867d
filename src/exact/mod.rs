//! Exact TSP solvers.
//!
//! - [`branch_and_bound`] — depth-first search with lower-bound pruning,
//!   worst case O(n!)
//! - [`held_karp`] — bitmask dynamic program, O(n² · 2ⁿ), capped at
//!   [`MAX_POINTS`] points
//!
//! Both return the true optimum and run to completion: there is no partial
//! result, timeout, or cancellation. Keeping instances small is the
//! caller's job.

mod branch_bound;
mod held_karp;

pub use branch_bound::branch_and_bound;
pub use held_karp::held_karp;
pub use held_karp::MAX_POINTS;
