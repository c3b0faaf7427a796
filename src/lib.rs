//! # u-tour
//!
//! Traveling salesman optimization over labeled 3D points with an elitist
//! genetic algorithm.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, TourSolver trait)
//! - [`distance`] — Dense distance matrix
//! - [`ga`] — Genetic algorithm engine and operators
//! - [`error`] — Error types
//! - [`random`] — Seeded random number generators
//!
//! ## Example
//!
//! ```
//! use u_tour::models::{Point, TourSolver};
//! use u_tour::ga::{GaConfig, GaEngine};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0, 0.0),
//!     Point::new(2, 0.0, 0.0, 1.0),
//!     Point::new(3, 0.0, 1.0, 1.0),
//!     Point::new(4, 0.0, 1.0, 0.0),
//! ];
//! let mut engine = GaEngine::new(points, GaConfig::quick().with_seed(7))?;
//! let result = engine.run()?;
//! println!("{:?} {} ({} us)", result.best_ids(), result.best_fitness, result.elapsed_micros());
//! # Ok::<(), u_tour::error::TourError>(())
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod models;
pub mod random;

pub use error::TourError;
