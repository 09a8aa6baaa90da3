//! The stochastic ranking sorter.
//!
//! A bubble sort over an index permutation where the comparison criterion
//! is chosen at random per adjacent pair: with probability `pr` (or
//! whenever both individuals are feasible) the pair is ordered by fitness,
//! otherwise by constraint violation. Up to `n` passes are executed; a
//! pass without swaps terminates the sort.

use super::types::{Constrained, RankOutcome};
use crate::error::RankingError;
use rand::Rng;

/// Literature default for the fitness-comparison probability `pr`.
///
/// Runarsson & Yao (2000) recommend `0.4 < pr < 0.5` so that feasibility
/// dominates the ordering slightly more often than the objective does.
pub const DEFAULT_PR: f64 = 0.45;

/// Ranks a population by fitness with reduced priority for violations.
///
/// Returns a permutation of `0..n` (best-ranked first) refined from
/// `initial_order`, or from the identity permutation when `initial_order`
/// is `None`.
///
/// # Algorithm (Runarsson & Yao, 2000)
///
/// Up to `n` bubble passes over adjacent pairs `(order[j], order[j+1])`:
///
/// 1. Draw a batch of `n` uniform values in `[0, 1)` for the pass.
/// 2. For each pair: if `u[j] < pr`, or both individuals are feasible,
///    swap when the left fitness is strictly greater; otherwise swap when
///    the left violation is strictly greater. Equal values never swap.
/// 3. Stop early when a full pass produces no swap.
///
/// Each executed pass draws exactly `n` values even though only `n - 1`
/// pairs exist; the surplus draw is kept because it is observable in the
/// random stream and seeded consumers depend on its position.
///
/// `pr == 1.0` degenerates to a stable ascending sort by fitness;
/// `pr == 0.0` orders strictly feasibility-first. Values outside `[0, 1]`
/// are not rejected and simply saturate at those two behaviors.
///
/// # Complexity
///
/// O(n²) worst case (`n` passes of `n - 1` comparisons), O(n) space.
///
/// # Errors
///
/// - [`RankingError::LengthMismatch`] if `fitness` and `violation` have
///   different lengths.
/// - [`RankingError::InvalidPermutation`] if `initial_order` is given and
///   is not a permutation of `0..n`.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_ranking::ranking::{stochastic_ranking, DEFAULT_PR};
///
/// let fitness = vec![3.0, 1.0, 2.0];
/// let violation = vec![0.0, 0.0, 0.0];
/// let mut rng = StdRng::seed_from_u64(42);
///
/// // Fully feasible populations sort by fitness regardless of pr.
/// let order = stochastic_ranking(&fitness, &violation, DEFAULT_PR, None, &mut rng)?;
/// assert_eq!(order, vec![1, 2, 0]);
/// # Ok::<(), u_ranking::error::RankingError>(())
/// ```
pub fn stochastic_ranking<R: Rng>(
    fitness: &[f64],
    violation: &[f64],
    pr: f64,
    initial_order: Option<Vec<usize>>,
    rng: &mut R,
) -> Result<Vec<usize>, RankingError> {
    stochastic_ranking_with_stats(fitness, violation, pr, initial_order, rng)
        .map(|outcome| outcome.order)
}

/// Like [`stochastic_ranking`], additionally reporting pass statistics.
///
/// Useful for callers that adapt `pr` or their pass budget based on how
/// quickly the ordering settles.
pub fn stochastic_ranking_with_stats<R: Rng>(
    fitness: &[f64],
    violation: &[f64],
    pr: f64,
    initial_order: Option<Vec<usize>>,
    rng: &mut R,
) -> Result<RankOutcome, RankingError> {
    let n = fitness.len();
    if violation.len() != n {
        return Err(RankingError::LengthMismatch {
            fitness: n,
            violation: violation.len(),
        });
    }

    let mut order = match initial_order {
        Some(order) => {
            validate_permutation(&order, n)?;
            order
        }
        None => (0..n).collect(),
    };

    if n <= 1 {
        // Nothing to compare; no passes, no random draws.
        return Ok(RankOutcome {
            order,
            passes: 0,
            converged: true,
        });
    }

    let mut u = vec![0.0_f64; n];
    let mut passes = 0;
    let mut converged = false;

    for _ in 0..n {
        // One uniform per adjacent pair, drawn as a batch of n up front.
        for slot in u.iter_mut() {
            *slot = rng.random_range(0.0..1.0);
        }
        passes += 1;

        let mut swapped = false;
        for j in 0..n - 1 {
            let (a, b) = (order[j], order[j + 1]);
            let by_fitness = u[j] < pr || (violation[a] == 0.0 && violation[b] == 0.0);
            let should_swap = if by_fitness {
                fitness[a] > fitness[b]
            } else {
                violation[a] > violation[b]
            };
            if should_swap {
                order.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            converged = true;
            break;
        }
    }

    Ok(RankOutcome {
        order,
        passes,
        converged,
    })
}

/// Ranks a slice of [`Constrained`] individuals.
///
/// Convenience adapter: extracts the fitness and violation vectors and
/// delegates to [`stochastic_ranking`] starting from the identity order.
pub fn rank_population<T: Constrained, R: Rng>(
    population: &[T],
    pr: f64,
    rng: &mut R,
) -> Result<Vec<usize>, RankingError> {
    let fitness: Vec<f64> = population.iter().map(|ind| ind.fitness()).collect();
    let violation: Vec<f64> = population.iter().map(|ind| ind.violation()).collect();
    stochastic_ranking(&fitness, &violation, pr, None, rng)
}

/// Check that `order` is a bijection onto `0..n`.
fn validate_permutation(order: &[usize], n: usize) -> Result<(), RankingError> {
    if order.len() != n {
        return Err(RankingError::InvalidPermutation { expected: n });
    }
    let mut seen = vec![false; n];
    for &idx in order {
        if idx >= n || seen[idx] {
            return Err(RankingError::InvalidPermutation { expected: n });
        }
        seen[idx] = true;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
