//! Tour crossover and mutation operators.
//!
//! # Crossover
//!
//! [`crossbreed`] is a prefix variant of order crossover: the child starts
//! with the first `⌊n/3⌋ + 1` genes of parent1, then takes the remaining
//! genes in the order they appear in parent2. Both parents are permutations
//! of the same positions, so the child is always complete; a short child
//! means the parents were malformed and is reported as an error rather than
//! truncated.
//!
//! # Mutation
//!
//! [`mutate`] visits every gene and, with a fixed percentage chance, swaps it
//! with a gene at a different position. Swapping keeps the permutation
//! intact.
//!
//! # Reference
//!
//! Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

use crate::error::{Result, TourError};

use super::chromosome::Chromosome;

/// Number of leading parent1 genes copied into a child of length `n`.
pub fn prefix_len(n: usize) -> usize {
    n / 3 + 1
}

/// Produces one unscored child from two parents.
///
/// # Errors
///
/// Returns [`TourError::ChromosomeInvariant`] if the parents differ in
/// length or the child does not cover every gene of parent1.
///
/// # Examples
///
/// ```
/// use u_tour::ga::{crossbreed, Chromosome};
///
/// let p1 = Chromosome::new(vec![0, 1, 2, 3, 4, 5]);
/// let p2 = Chromosome::new(vec![5, 4, 3, 2, 1, 0]);
/// let child = crossbreed(&p1, &p2).unwrap();
/// // ⌊6/3⌋ + 1 = 3 genes from p1, the rest in p2's order
/// assert_eq!(child.genes(), &[0, 1, 2, 5, 4, 3]);
/// ```
pub fn crossbreed(parent1: &Chromosome, parent2: &Chromosome) -> Result<Chromosome> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(TourError::chromosome_invariant(format!(
            "parents differ in length: {n} vs {}",
            parent2.len()
        )));
    }

    let upper = parent1
        .genes()
        .iter()
        .chain(parent2.genes())
        .copied()
        .max()
        .map_or(0, |m| m + 1);
    let mut present = vec![false; upper];
    let mut child = Vec::with_capacity(n);

    for &gene in parent1.genes().iter().take(prefix_len(n).min(n)) {
        if !present[gene] {
            present[gene] = true;
            child.push(gene);
        }
    }
    for &gene in parent2.genes() {
        if !present[gene] {
            present[gene] = true;
            child.push(gene);
        }
    }

    if child.len() != n {
        return Err(TourError::chromosome_invariant(format!(
            "crossover produced {} genes from parents of length {n}",
            child.len()
        )));
    }
    Ok(Chromosome::new(child))
}

/// Draws two distinct indices in `0..len`.
///
/// # Panics
///
/// Panics if `len < 2`.
pub fn pick_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    assert!(len >= 2, "need at least two parents to form a pair");
    let first = rng.random_range(0..len);
    (first, swap_partner(first, len, rng))
}

/// Breeds `pairs` children from randomly paired members of `pool`.
///
/// Each pair uses two distinct pool indices; indices are drawn with
/// replacement across pairs. A pool with fewer than two members yields no
/// children.
pub fn breed_generation<R: Rng>(
    pool: &[Chromosome],
    pairs: usize,
    rng: &mut R,
) -> Result<Vec<Chromosome>> {
    if pool.len() < 2 {
        return Ok(Vec::new());
    }
    let mut children = Vec::with_capacity(pairs);
    for _ in 0..pairs {
        let (a, b) = pick_pair(pool.len(), rng);
        children.push(crossbreed(&pool[a], &pool[b])?);
    }
    Ok(children)
}

/// Picks a position in `0..n` other than `i`, uniformly.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn swap_partner<R: Rng>(i: usize, n: usize, rng: &mut R) -> usize {
    let j = rng.random_range(0..n - 1);
    if j >= i {
        j + 1
    } else {
        j
    }
}

/// Swap-mutates `chromosome` in place and returns the number of swaps.
///
/// For each position a uniform integer in `[1, 100]` is drawn; values at or
/// below `rate_percent` trigger a swap with another position. The fitness is
/// invalidated when any swap happens.
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, rate_percent: u32, rng: &mut R) -> usize {
    let n = chromosome.len();
    if n < 2 {
        return 0;
    }

    let mut swaps = 0;
    for i in 0..n {
        let roll: u32 = rng.random_range(1..=100);
        if roll <= rate_percent {
            let j = swap_partner(i, n, rng);
            chromosome.genes_mut().swap(i, j);
            swaps += 1;
        }
    }
    if swaps > 0 {
        chromosome.invalidate();
    }
    swaps
}
