//! Tour chromosome.
//!
//! A chromosome encodes a closed tour as a permutation of point positions
//! (indices into the input point sequence). Positions stand in for point
//! identity: a valid tour holds every position in `0..n` exactly once.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};

/// A candidate tour with its fitness (closed-cycle length).
///
/// Lower fitness = better tour. Unscored chromosomes carry
/// `f64::INFINITY`, serialized as `null`.
///
/// # Examples
///
/// ```
/// use u_tour::ga::Chromosome;
///
/// let tour = Chromosome::new(vec![2, 0, 1]);
/// assert_eq!(tour.genes(), &[2, 0, 1]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    tour: Vec<usize>,
    #[serde(with = "fitness_or_null")]
    fitness: f64,
}

/// Maps non-finite fitness to `null` and back to `f64::INFINITY`.
mod fitness_or_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(fitness: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if fitness.is_finite() {
            serializer.serialize_some(fitness)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl Chromosome {
    /// Creates an unscored chromosome from a position permutation.
    pub fn new(tour: Vec<usize>) -> Self {
        Self {
            tour,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a chromosome and scores it against `distances`.
    pub fn scored(tour: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let fitness = Self::score(&tour, distances);
        Self { tour, fitness }
    }

    /// Returns the position permutation.
    pub fn genes(&self) -> &[usize] {
        &self.tour
    }

    /// Returns a mutable reference to the position permutation.
    ///
    /// Callers that change the tour must re-score it.
    pub fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.tour
    }

    /// Current fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the fitness directly.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Returns `true` once a fitness has been computed.
    pub fn is_scored(&self) -> bool {
        self.fitness.is_finite()
    }

    /// Marks the chromosome as needing re-evaluation.
    pub fn invalidate(&mut self) {
        self.fitness = f64::INFINITY;
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns true if the tour has no genes.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Total length of the closed cycle through `tour`.
    ///
    /// Sums consecutive distances and closes the cycle from the last
    /// position back to the first. Tours shorter than two positions have
    /// length zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::models::Point;
    /// use u_tour::distance::DistanceMatrix;
    /// use u_tour::ga::Chromosome;
    ///
    /// let points = vec![
    ///     Point::new(1, 0.0, 0.0, 0.0),
    ///     Point::new(2, 3.0, 0.0, 0.0),
    ///     Point::new(3, 3.0, 4.0, 0.0),
    /// ];
    /// let dm = DistanceMatrix::from_points(&points);
    /// assert!((Chromosome::score(&[0, 1, 2], &dm) - 12.0).abs() < 1e-10);
    /// ```
    pub fn score(tour: &[usize], distances: &DistanceMatrix) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour
            .windows(2)
            .map(|pair| distances.get(pair[0], pair[1]))
            .sum();
        open + distances.get(tour[tour.len() - 1], tour[0])
    }

    /// Recomputes and stores this chromosome's fitness.
    pub fn evaluate(&mut self, distances: &DistanceMatrix) -> f64 {
        self.fitness = Self::score(&self.tour, distances);
        self.fitness
    }

    /// Checks that the tour is a permutation of `0..n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.tour.len() != n {
            return Err(TourError::chromosome_invariant(format!(
                "tour has {} genes, expected {n}",
                self.tour.len()
            )));
        }
        let mut seen = vec![false; n];
        for &pos in &self.tour {
            if pos >= n {
                return Err(TourError::chromosome_invariant(format!(
                    "position {pos} out of range for {n} points"
                )));
            }
            if seen[pos] {
                return Err(TourError::chromosome_invariant(format!(
                    "position {pos} appears more than once"
                )));
            }
            seen[pos] = true;
        }
        Ok(())
    }
}

/// Sorts a population ascending by fitness, keeping the original order of ties.
pub(crate) fn rank_by_fitness(population: &mut [Chromosome]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
