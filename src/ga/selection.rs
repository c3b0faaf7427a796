//! Elitist truncation selection.
//!
//! The breeding pool is the best `⌊ratio × N⌋` individuals of the ranked
//! population. There is no stochastic component: every individual above the
//! cut breeds, every individual below it is discarded.

use super::chromosome::{rank_by_fitness, Chromosome};

/// Number of individuals kept from a population of `population_size`.
///
/// # Examples
///
/// ```
/// use u_tour::ga::elite_count;
///
/// assert_eq!(elite_count(500, 0.3), 150);
/// assert_eq!(elite_count(3, 0.3), 0);
/// ```
pub fn elite_count(population_size: usize, ratio: f64) -> usize {
    (population_size as f64 * ratio) as usize
}

/// Returns the best `⌊ratio × N⌋` chromosomes, ascending by fitness.
///
/// The input does not need to be sorted; a ranked copy is taken. Ties keep
/// their order in `population`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::ga::{initialize_population, select_elite};
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i, 0.0, i as f64, 0.0)).collect();
/// let dm = DistanceMatrix::from_points(&points);
/// let pop = initialize_population(5, 500, &dm);
/// let pool = select_elite(&pop, 0.3);
/// assert_eq!(pool.len(), 36);
/// ```
pub fn select_elite(population: &[Chromosome], ratio: f64) -> Vec<Chromosome> {
    let keep = elite_count(population.len(), ratio);
    if keep == 0 {
        return Vec::new();
    }
    let mut ranked = population.to_vec();
    rank_by_fitness(&mut ranked);
    ranked.truncate(keep);
    ranked
}
