//! Error types for the ranking routines.

use thiserror::Error;

/// Invalid input to a ranking routine.
///
/// Ranking is a pure computation: once inputs are validated, nothing can
/// fail, so malformed input is the only error category. No partial result
/// is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankingError {
    /// `fitness` and `violation` must describe the same population.
    #[error("fitness has {fitness} entries but violation has {violation}")]
    LengthMismatch {
        /// Length of the fitness vector.
        fitness: usize,
        /// Length of the violation vector.
        violation: usize,
    },

    /// The supplied initial order is not a bijection onto `0..expected`.
    ///
    /// Raised for a wrong length, an out-of-range index, or a duplicate
    /// index.
    #[error("initial order is not a permutation of 0..{expected}")]
    InvalidPermutation {
        /// The population size the order must permute.
        expected: usize,
    },
}
