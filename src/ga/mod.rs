//! Genetic algorithm for closed tours.
//!
//! - [`Chromosome`] — Position permutation with its closed-cycle length
//! - [`initialize_population`] — Lexicographic starting population
//! - [`select_elite`] — Elitist truncation selection
//! - [`crossbreed`] / [`mutate`] — Prefix order crossover and swap mutation
//! - [`GaEngine`] — Generation loop, implements [`TourSolver`](crate::models::TourSolver)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod engine;
pub mod operators;
mod population;
mod selection;

pub use chromosome::Chromosome;
pub use config::{BestTracking, GaConfig, Replacement};
pub use engine::{EngineState, GaEngine, GaResult};
pub use operators::{breed_generation, crossbreed, mutate, pick_pair, swap_partner};
pub use population::{initialize_population, next_permutation};
pub use selection::{elite_count, select_elite};
