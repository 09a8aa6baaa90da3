//! Stochastic ranking of constrained populations.
//!
//! Produces an index permutation approximating ascending-fitness order
//! while giving constraint violation reduced priority, governed by a
//! probability parameter. Randomized tie-breaking between the two
//! comparison criteria keeps infeasible-but-good solutions in play instead
//! of collapsing the population onto feasible-but-poor ones.
//!
//! # Key Items
//!
//! - [`stochastic_ranking`]: slice-based sorter (the core routine)
//! - [`stochastic_ranking_with_stats`]: same algorithm, returns a
//!   [`RankOutcome`] with pass statistics
//! - [`rank_population`]: adapter over [`Constrained`] individuals
//! - [`DEFAULT_PR`]: literature default for the comparator probability
//!
//! # References
//!
//! - Runarsson & Yao (2000), "Stochastic Ranking for Constrained
//!   Evolutionary Optimization", IEEE Transactions on Evolutionary
//!   Computation, 4(3), 284-294

mod sorter;
mod types;

pub use sorter::{
    rank_population, stochastic_ranking, stochastic_ranking_with_stats, DEFAULT_PR,
};
pub use types::{Constrained, RankOutcome};
