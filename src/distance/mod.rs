//! Distance matrices.
//!
//! Provides a dense, read-only distance matrix over a point set.

mod matrix;

pub use matrix::DistanceMatrix;
