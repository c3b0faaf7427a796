//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns the point set, the distance matrix and the random
//! stream for one run, and orchestrates:
//! initialization → (selection → crossover → mutation → re-scoring) × N.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{Point, TourSolver};
use crate::random::rng_from_seed;

use super::chromosome::Chromosome;
use super::config::{BestTracking, GaConfig, Replacement};
use super::operators::{breed_generation, mutate};
use super::population::initialize_population;
use super::selection::select_elite;

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed; no population yet.
    Uninitialized,
    /// Starting population built and scored.
    Initialized,
    /// Generation loop in progress.
    Evolving,
    /// Run finished; a result is available.
    Done,
}

/// Result of a GA run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaResult {
    /// The reported tour (see [`BestTracking`]).
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Point ids along the reported tour.
    pub best_ids: Vec<usize>,

    /// Number of generations that recorded an elite.
    pub generations: usize,

    /// Whether evolution stopped early because no breeding pool could be
    /// formed.
    pub collapsed: bool,

    /// Elite fitness of each executed generation.
    pub elite_history: Vec<f64>,

    /// Wall time spent initializing and evolving.
    pub elapsed: Duration,
}

impl GaResult {
    /// Point ids along the reported tour.
    pub fn best_ids(&self) -> &[usize] {
        &self.best_ids
    }

    /// Elapsed wall time in microseconds.
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    /// Lowest elite fitness recorded by any generation, if one ran.
    pub fn best_recorded_elite(&self) -> Option<f64> {
        self.elite_history.iter().copied().reduce(f64::min)
    }

    /// Serializes the result as JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Genetic-algorithm tour solver.
///
/// # Usage
///
/// ```
/// use u_tour::models::{Point, TourSolver};
/// use u_tour::ga::{GaConfig, GaEngine};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0, 0.0),
///     Point::new(3, 1.0, 1.0, 0.0),
///     Point::new(4, 0.0, 1.0, 0.0),
/// ];
/// let mut engine = GaEngine::new(points, GaConfig::quick().with_seed(42)).unwrap();
/// let result = engine.run().unwrap();
/// assert!((result.best_fitness - 4.0).abs() < 1e-10);
/// ```
pub struct GaEngine {
    points: Vec<Point>,
    distances: DistanceMatrix,
    config: GaConfig,
    rng: StdRng,
    state: EngineState,
    population: Vec<Chromosome>,
    initial_size: usize,
    best: Option<Chromosome>,
    elite_recorded: bool,
    init_elapsed: Duration,
    result: Option<GaResult>,
}

impl GaEngine {
    /// Creates an engine over `points`.
    ///
    /// # Errors
    ///
    /// - [`TourError::InvalidInput`] for fewer than two points, duplicate
    ///   ids, or non-finite coordinates.
    /// - [`TourError::InvalidConfig`] if `config` fails validation.
    #[instrument(level = "debug", skip(points, config), fields(point_count = points.len()))]
    pub fn new(points: Vec<Point>, config: GaConfig) -> Result<Self> {
        config.validate()?;
        validate_points(&points)?;

        let distances = DistanceMatrix::from_points(&points);
        let rng = rng_from_seed(config.seed);
        Ok(Self {
            points,
            distances,
            config,
            rng,
            state: EngineState::Uninitialized,
            population: Vec::new(),
            initial_size: 0,
            best: None,
            elite_recorded: false,
            init_elapsed: Duration::ZERO,
            result: None,
        })
    }

    /// Input points, in their original order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distance matrix over the input points.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Engine configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Working population of the latest generation.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Result of the last completed run.
    pub fn result(&self) -> Option<&GaResult> {
        self.result.as_ref()
    }

    /// Maps a position tour to point ids.
    pub fn ids_of(&self, chromosome: &Chromosome) -> Vec<usize> {
        chromosome
            .genes()
            .iter()
            .map(|&pos| self.points[pos].id())
            .collect()
    }

    fn record_elite(&mut self, elite: &Chromosome) {
        match self.config.best_tracking {
            BestTracking::RunningMinimum => {
                let improved = self
                    .best
                    .as_ref()
                    .is_none_or(|best| elite.fitness() < best.fitness());
                if improved {
                    self.best = Some(elite.clone());
                }
            }
            BestTracking::FirstRecorded => {
                if !self.elite_recorded {
                    self.best = Some(elite.clone());
                }
            }
        }
        self.elite_recorded = true;
    }

    fn pairs_for(&self, pool_size: usize) -> usize {
        match self.config.replacement {
            Replacement::HalfPool => pool_size / 2,
            Replacement::Refill => self.initial_size,
        }
    }

    fn evolve(&mut self) -> Result<GaResult> {
        if self.state == EngineState::Uninitialized {
            TourSolver::initialize(self)?;
        }

        let start = Instant::now();
        self.state = EngineState::Evolving;
        let mut elite_history = Vec::new();
        let mut collapsed = false;
        let n = self.points.len();

        for generation in 1..=self.config.max_generations {
            let pool = select_elite(&self.population, self.config.elite_ratio);
            let Some(elite) = pool.first() else {
                collapsed = true;
                break;
            };
            elite_history.push(elite.fitness());
            tracing::trace!(generation, fitness = elite.fitness(), "generation elite");
            self.record_elite(elite);

            if pool.len() < 2 {
                collapsed = true;
                break;
            }

            let pairs = self.pairs_for(pool.len());
            let mut children = breed_generation(&pool, pairs, &mut self.rng)?;
            for child in children.iter_mut() {
                mutate(child, self.config.mutation_rate_percent, &mut self.rng);
                child.evaluate(&self.distances);
                debug_assert!(
                    child.validate(n).is_ok(),
                    "child is not a permutation: {:?}",
                    child.genes()
                );
            }
            self.population = children;
        }

        if collapsed {
            tracing::warn!(
                generations = elite_history.len(),
                population = self.population.len(),
                "population too small to breed; stopping early"
            );
        }

        let best = self
            .best
            .clone()
            .ok_or_else(|| TourError::invalid_input("no tour was produced"))?;
        let elapsed = self.init_elapsed + start.elapsed();
        let result = GaResult {
            best_fitness: best.fitness(),
            best_ids: self.ids_of(&best),
            best,
            generations: elite_history.len(),
            collapsed,
            elite_history,
            elapsed,
        };
        self.state = EngineState::Done;

        tracing::info!(
            best_fitness = result.best_fitness,
            generations = result.generations,
            collapsed = result.collapsed,
            elapsed_us = result.elapsed_micros() as u64,
            "tour search finished"
        );
        Ok(result)
    }
}

impl TourSolver for GaEngine {
    /// Builds the starting population; calling it again resets the run.
    #[instrument(level = "debug", skip(self), fields(point_count = self.points.len(), cap = self.config.population_cap))]
    fn initialize(&mut self) -> Result<()> {
        let start = Instant::now();
        self.population =
            initialize_population(self.points.len(), self.config.population_cap, &self.distances);
        self.initial_size = self.population.len();
        self.best = self.population.first().cloned();
        self.elite_recorded = false;
        self.result = None;
        self.init_elapsed = start.elapsed();
        self.state = EngineState::Initialized;

        tracing::debug!(
            population = self.initial_size,
            best_fitness = self.best.as_ref().map(Chromosome::fitness),
            "population initialized"
        );
        Ok(())
    }

    /// Runs the generation loop once; later calls return the same result
    /// until [`initialize`](TourSolver::initialize) is called again.
    #[instrument(level = "debug", skip(self), fields(point_count = self.points.len(), max_generations = self.config.max_generations))]
    fn run(&mut self) -> Result<&GaResult> {
        let result = match self.result.take() {
            Some(result) => result,
            None => self.evolve()?,
        };
        Ok(self.result.insert(result))
    }

    fn best_result(&self) -> Option<&Chromosome> {
        self.best.as_ref()
    }
}

/// Rejects inputs the engine cannot form a tour over.
fn validate_points(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(TourError::invalid_input(format!(
            "need at least 2 points to form a tour, got {}",
            points.len()
        )));
    }
    let mut ids = HashSet::with_capacity(points.len());
    for point in points {
        if !ids.insert(point.id()) {
            return Err(TourError::invalid_input(format!(
                "duplicate point id {}",
                point.id()
            )));
        }
        if !point.is_finite() {
            return Err(TourError::invalid_input(format!(
                "point {} has a non-finite coordinate",
                point.id()
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
