//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// How many children each generation breeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Replacement {
    /// Breed exactly `⌊pool / 2⌋` children.
    ///
    /// The population shrinks every generation (500 → 75 → 11 → 1 → 0 with
    /// the default ratio) until no breeding pool can be formed.
    #[default]
    HalfPool,

    /// Breed until the next generation matches the initial population size.
    Refill,
}

/// Which chromosome the run reports as its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BestTracking {
    /// Lowest fitness seen across the initial population and every
    /// generation's elite. Replaced only on strict improvement.
    #[default]
    RunningMinimum,

    /// The first elite recorded, which is always the best chromosome of the
    /// initial population; later generations never replace it.
    FirstRecorded,
}

/// Configuration for the tour GA.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_cap, 500);
/// assert_eq!(config.max_generations, 250_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::{BestTracking, GaConfig, Replacement};
///
/// let config = GaConfig::default()
///     .with_max_generations(1_000)
///     .with_replacement(Replacement::Refill)
///     .with_best_tracking(BestTracking::FirstRecorded)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Upper bound on the number of enumerated starting permutations.
    pub population_cap: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Fraction of the ranked population kept as breeding stock (0.0–1.0).
    pub elite_ratio: f64,

    /// Per-gene swap chance in percent (0–100).
    pub mutation_rate_percent: u32,

    /// Child count policy.
    pub replacement: Replacement,

    /// Reported-best policy.
    pub best_tracking: BestTracking,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_cap: 500,
            max_generations: 250_000,
            elite_ratio: 0.3,
            mutation_rate_percent: 10,
            replacement: Replacement::HalfPool,
            best_tracking: BestTracking::RunningMinimum,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the starting population cap.
    pub fn with_population_cap(mut self, cap: usize) -> Self {
        self.population_cap = cap;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate in percent.
    pub fn with_mutation_rate_percent(mut self, rate: u32) -> Self {
        self.mutation_rate_percent = rate.min(100);
        self
    }

    /// Sets the child count policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Sets the reported-best policy.
    pub fn with_best_tracking(mut self, tracking: BestTracking) -> Self {
        self.best_tracking = tracking;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for tests and demos: default operators, 200 generations.
    pub fn quick() -> Self {
        Self {
            max_generations: 200,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_cap == 0 {
            return Err(TourError::invalid_config("population_cap must be at least 1"));
        }
        if !(self.elite_ratio > 0.0 && self.elite_ratio <= 1.0) {
            return Err(TourError::invalid_config(format!(
                "elite_ratio must be in (0, 1], got {}",
                self.elite_ratio
            )));
        }
        if self.mutation_rate_percent > 100 {
            return Err(TourError::invalid_config(format!(
                "mutation_rate_percent must be at most 100, got {}",
                self.mutation_rate_percent
            )));
        }
        Ok(())
    }
}
