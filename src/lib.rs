// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound search for optimal counterfeit-pearl weighing strategies.
//!
//! Given `n` pearls of which exactly one is counterfeit (heavier or lighter
//! than the rest, direction unknown), this crate computes the minimum number
//! of balance-scale weighings that suffices, in the worst case, to identify
//! the counterfeit pearl and its direction.
//!
//! # Architecture
//!
//! The solver is built from four cooperating pieces:
//!
//! 1. **Hypothesis space** ([`hypothesis`]): the 2n candidate explanations
//!    ("pearl i is heavy" / "pearl i is light"), grouped into a
//!    [`Population`] of hypotheses still consistent with all weighings so far.
//! 2. **Weighing enumeration** ([`weighing`]): a lazy iterator over every
//!    combinatorially distinct way to place two disjoint equal-size groups
//!    of pearls on the scale pans.
//! 3. **Outcome partitioning** ([`outcome`]): splitting a population into
//!    up to three sub-populations according to which scale outcome each
//!    hypothesis predicts.
//! 4. **Recursive minimization** ([`solver`]): for each population, try
//!    every informative weighing, recursively cost its worst-case branch,
//!    and keep the cheapest, pruned by the information-theoretic
//!    `ceil(log3)` lower bound.
//!
//! # Example
//!
//! ```
//! use pearl_search::solve_puzzle;
//!
//! // The classical puzzle: 3 pearls need 2 weighings.
//! assert_eq!(solve_puzzle(3), Some(2));
//!
//! // With 2 or fewer pearls no strategy can pin down the direction.
//! assert_eq!(solve_puzzle(2), None);
//! ```
//!
//! Runtime grows combinatorially with `n`; for anything beyond small
//! single-digit pearl counts, use [`Solver`] with a call budget (and
//! optionally memoization) rather than the bare [`solve_puzzle`].

pub mod hypothesis;
pub mod outcome;
pub mod solver;
pub mod weighing;

// Re-export commonly used types
pub use hypothesis::{Hypothesis, Polarity, Population};
pub use outcome::{Branch, Outcome};
pub use solver::{solve_puzzle, SearchError, Solver};
pub use weighing::{weighings, Weighing};
