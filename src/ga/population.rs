//! Population initialization by lexicographic enumeration.
//!
//! The starting population is the first `cap` permutations of the input
//! ordering in lexicographic order. Inputs with fewer than seven points
//! exhaust every permutation before reaching the default cap of 500; larger
//! inputs get a lexicographic prefix, not a uniform sample.

use crate::distance::DistanceMatrix;

use super::chromosome::{rank_by_fitness, Chromosome};

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns `false` when `perm` is already the last permutation, in which
/// case it is reset to ascending order.
///
/// # Examples
///
/// ```
/// use u_tour::ga::next_permutation;
///
/// let mut p = vec![0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, vec![1, 0, 2]);
///
/// let mut last = vec![2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, vec![0, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = n - 1;
    while pivot > 0 && perm[pivot - 1] >= perm[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        perm.reverse();
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = n - 1;
    while perm[successor] <= perm[pivot] {
        successor -= 1;
    }
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

/// Builds the starting population for `n` points.
///
/// Enumerates permutations of `0..n` starting from the identity ordering
/// until either all are exhausted or `cap` chromosomes exist, scores each
/// one, and sorts ascending by fitness (ties keep enumeration order).
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::ga::initialize_population;
///
/// let points: Vec<Point> = (0..4).map(|i| Point::new(i, i as f64, 0.0, 0.0)).collect();
/// let dm = DistanceMatrix::from_points(&points);
/// let pop = initialize_population(4, 500, &dm);
/// assert_eq!(pop.len(), 24);
/// assert!(pop.windows(2).all(|w| w[0].fitness() <= w[1].fitness()));
/// ```
pub fn initialize_population(n: usize, cap: usize, distances: &DistanceMatrix) -> Vec<Chromosome> {
    let mut population = Vec::with_capacity(cap.min(1024));
    if cap == 0 {
        return population;
    }

    let mut current: Vec<usize> = (0..n).collect();
    loop {
        population.push(Chromosome::new(current.clone()));
        if population.len() >= cap || !next_permutation(&mut current) {
            break;
        }
    }

    for chromosome in population.iter_mut() {
        chromosome.evaluate(distances);
    }
    rank_by_fitness(&mut population);
    population
}
