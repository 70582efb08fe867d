//! Distance matrix computation.

mod matrix;

pub use matrix::DistanceMatrix;
