//! # planar-tsp
//!
//! Tour construction for the planar Traveling Salesman Problem: exact and
//! approximate solvers over a shared graph backbone, for side-by-side
//! comparison.
//!
//! ## Modules
//!
//! - [`models`] — Value types (Point, Edge, Tour)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`geometry`] — Distance and tour-length primitives
//! - [`graph`] — MST builder, odd-degree matching, Eulerian circuits
//! - [`constructive`] — Nearest-neighbor and Christofides-style heuristics
//! - [`exact`] — Branch-and-bound and Held-Karp exact solvers
//! - [`error`] — Solver error types
//!
//! ## Usage
//!
//! Every solver is a pure, synchronous function of an explicit point slice:
//! no shared state, no background work, each call owning its working memory.
//! Points are identified by their index in the input slice throughout.
//!
//! ```
//! use planar_tsp::{christofides, held_karp, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 3.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(4.0, 0.0),
//! ];
//!
//! let approx = christofides(&points)?;
//! let exact = held_karp(&points)?;
//! assert!(exact.length(&points) <= approx.length(&points));
//! # Ok::<(), planar_tsp::SolveError>(())
//! ```
//!
//! The exact solvers are exponential by nature. [`held_karp`] refuses
//! instances above [`exact::MAX_POINTS`]; bounding [`branch_and_bound`]
//! invocations is left to the caller.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod exact;
pub mod geometry;
pub mod graph;
pub mod models;

pub use constructive::{christofides, nearest_neighbor};
pub use distance::DistanceMatrix;
pub use error::SolveError;
pub use exact::{branch_and_bound, held_karp};
pub use models::{Edge, Point, Tour};
