//! Domain model types for tour optimization.
//!
//! Provides the labeled 3D point and the solver capability trait that
//! tour-search strategies implement.

mod point;
mod solver;

pub use point::Point;
pub use solver::TourSolver;
