//! Constraint-handling selection primitives for evolutionary optimization.
//!
//! Domain-agnostic building blocks for selecting among candidate solutions
//! that carry both an objective value and a constraint-violation magnitude:
//!
//! - **Stochastic ranking**: index-permutation sorting that balances
//!   objective quality against feasibility via a randomized comparator
//!   (Runarsson & Yao, 2000). Avoids premature convergence toward
//!   feasible-but-poor solutions.
//! - **Parameter-less penalty**: folds violations into the objective so
//!   that unconstrained selection operators can be applied unchanged
//!   (Deb, 2000).
//!
//! # Conventions
//!
//! All objectives follow the **minimization** convention (lower fitness is
//! better). Constraint violations are magnitudes: `0.0` means the
//! individual is feasible, larger values mean worse violation.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts — scheduling, nesting, routing,
//! etc. are all defined by consumers at higher layers. Randomness is
//! injected as a [`rand::Rng`] parameter; there is no process-wide
//! generator, so seeded runs are fully reproducible.

pub mod error;
pub mod penalty;
pub mod ranking;
