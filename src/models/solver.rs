//! Tour solver capability.

use crate::error::Result;
use crate::ga::{Chromosome, GaResult};

/// A strategy that searches for a short closed tour over a fixed point set.
///
/// Solvers receive their points at construction; this trait covers the
/// lifecycle after that.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, TourSolver};
/// use u_tour::ga::{GaConfig, GaEngine};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0, 0.0),
///     Point::new(3, 1.0, 1.0, 0.0),
/// ];
/// let mut solver = GaEngine::new(points, GaConfig::quick().with_seed(1)).unwrap();
/// let result = solver.run().unwrap();
/// assert_eq!(result.best_ids().len(), 3);
/// assert!(solver.best_result().is_some());
/// ```
pub trait TourSolver {
    /// Prepares the solver's starting state.
    fn initialize(&mut self) -> Result<()>;

    /// Runs the search to completion and returns its result.
    fn run(&mut self) -> Result<&GaResult>;

    /// Best tour found so far, if the solver has been initialized.
    fn best_result(&self) -> Option<&Chromosome>;
}
