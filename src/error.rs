//! Solver error types.

use thiserror::Error;

/// Errors produced at the solver boundary.
///
/// Degenerate inputs (zero, one, or two points) are not errors: every
/// solver returns the trivial tour for them. Errors are reserved for input
/// the algorithms cannot meaningfully process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A point has a NaN or infinite coordinate.
    ///
    /// Checked once per solve, before any distance is computed, so that
    /// non-finite values fail fast instead of propagating NaN through a
    /// result tour.
    #[error("non-finite coordinate at point index {index}")]
    InvalidInput {
        /// Index of the offending point in the input slice.
        index: usize,
    },

    /// The instance is larger than the solver is willing to attempt.
    #[error("instance has {points} points, exceeding the solver limit of {limit}")]
    ResourceExceeded {
        /// Number of points in the rejected instance.
        points: usize,
        /// The solver's point-count ceiling.
        limit: usize,
    },
}
