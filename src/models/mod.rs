//! Value types shared by all solvers.
//!
//! Provides the core abstractions: planar points, weighted index edges, and
//! tours (closed visiting orders). Point identity throughout the crate is
//! the index within the input slice, never coordinate equality — duplicate
//! coordinates are legal input.

mod edge;
mod point;
mod tour;

pub use edge::Edge;
pub use point::Point;
pub use tour::Tour;
