//! Parameter-less penalty for constrained fitness.
//!
//! Folds constraint violations into the objective so that standard
//! (unconstrained) selection and ranking operators can be applied
//! unchanged: feasible individuals keep their raw fitness, while every
//! infeasible individual is pushed past the raw fitness range by its
//! violation magnitude.
//!
//! # References
//!
//! - Deb (2000), "An Efficient Constraint Handling Method for Genetic
//!   Algorithms"

use crate::error::RankingError;

/// Penalized fitness under the parameter-less rule.
///
/// Feasible individuals (violation `== 0.0`) keep `fitness[i]`. Infeasible
/// ones are assigned `base + violation[i]`, where `base` is `fmax` when
/// given and otherwise the maximum of all raw fitness values. Every
/// infeasible individual therefore ranks behind every feasible one, and
/// infeasible individuals rank among themselves by violation alone.
///
/// Pass `fmax` when several vectors must stay mutually comparable after
/// penalization (e.g. parents and their offspring): use the maximum raw
/// fitness across all of them.
///
/// # Errors
///
/// [`RankingError::LengthMismatch`] if `fitness` and `violation` have
/// different lengths.
///
/// # Example
///
/// ```
/// use u_ranking::penalty::penalized_fitness;
///
/// let fitness = vec![2.0, 5.0, 3.0];
/// let violation = vec![0.0, 0.0, 1.5];
///
/// let penalized = penalized_fitness(&fitness, &violation, None)?;
/// assert_eq!(penalized, vec![2.0, 5.0, 6.5]);
/// # Ok::<(), u_ranking::error::RankingError>(())
/// ```
pub fn penalized_fitness(
    fitness: &[f64],
    violation: &[f64],
    fmax: Option<f64>,
) -> Result<Vec<f64>, RankingError> {
    if fitness.len() != violation.len() {
        return Err(RankingError::LengthMismatch {
            fitness: fitness.len(),
            violation: violation.len(),
        });
    }
    if fitness.is_empty() {
        return Ok(Vec::new());
    }

    let base = match fmax {
        Some(fmax) => fmax,
        None => fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    };

    Ok(fitness
        .iter()
        .zip(violation.iter())
        .map(|(&f, &cv)| if cv > 0.0 { base + cv } else { f })
        .collect())
}
