// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighing outcomes and population partitioning.
//!
//! Under a given hypothesis, a weighing has exactly one predicted
//! [`Outcome`]: sum the hypothesis's weight-signature entries over each
//! pan and three-way compare the sums. Applying one weighing to a whole
//! population therefore partitions it into up to three outcome groups, a
//! [`Branch`]. The adversary picks which outcome actually occurs, so the
//! search costs a branch by its worst (largest-cost) group.
//!
//! A weighing whose predicted outcome is the same for every hypothesis in
//! the population tells the observer nothing; such non-informative
//! branches are filtered out before the minimizer ever sees them.

use crate::hypothesis::{Hypothesis, Population};
use crate::weighing::Weighing;
use std::cmp::Ordering;

/// The three possible results of placing pearls on the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The left pan goes down.
    LeftHeavier,
    /// The pans balance.
    Balanced,
    /// The right pan goes down.
    RightHeavier,
}

impl Outcome {
    /// All outcomes, in the order used for group indexing.
    pub const ALL: [Outcome; 3] = [Outcome::LeftHeavier, Outcome::Balanced, Outcome::RightHeavier];

    /// Map a three-way comparison of (left sum, right sum) to an outcome.
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::LeftHeavier,
            Ordering::Equal => Outcome::Balanced,
            Ordering::Less => Outcome::RightHeavier,
        }
    }

    /// Index of this outcome into a `[T; 3]` group table.
    pub fn as_usize(self) -> usize {
        match self {
            Outcome::LeftHeavier => 0,
            Outcome::Balanced => 1,
            Outcome::RightHeavier => 2,
        }
    }
}

/// The outcome the given hypothesis predicts for the given weighing.
///
/// Each pan's weight is the sum of the hypothesis's signature entries over
/// the pearls on that pan; only the counterfeit pearl contributes, so a
/// pan sum is -1, 0 or +1.
pub fn measure(hypothesis: &Hypothesis, weighing: &Weighing) -> Outcome {
    let left: i32 = weighing.left().iter().map(|&p| hypothesis.weight(p)).sum();
    let right: i32 = weighing.right().iter().map(|&p| hypothesis.weight(p)).sum();
    Outcome::from_ordering(left.cmp(&right))
}

/// A population partitioned by the outcomes of one weighing.
///
/// Each hypothesis lands in exactly one outcome group, in first-seen
/// order, so the groups are pairwise disjoint and their union is the
/// original population.
#[derive(Debug, Clone)]
pub struct Branch {
    groups: [Vec<Hypothesis>; 3],
}

impl Branch {
    /// Partition `population` by the predicted outcome of `weighing`.
    pub fn partition(population: &Population, weighing: &Weighing) -> Self {
        let mut groups: [Vec<Hypothesis>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for hypothesis in population {
            let outcome = measure(hypothesis, weighing);
            groups[outcome.as_usize()].push(*hypothesis);
        }
        Self { groups }
    }

    /// True when at least two outcome groups are non-empty.
    ///
    /// A single-group branch means every hypothesis predicts the same
    /// outcome: performing the weighing would rule nothing out, so the
    /// minimizer must never choose it.
    pub fn is_informative(&self) -> bool {
        self.groups.iter().filter(|g| !g.is_empty()).count() >= 2
    }

    /// Size of the largest outcome group.
    ///
    /// The minimizer sorts candidate branches by this value, ascending:
    /// more balanced branches are likelier to hit the information-theoretic
    /// bound early and short-circuit the search.
    pub fn largest_group_len(&self) -> usize {
        self.groups.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The hypotheses that predict `outcome`, or `None` if no hypothesis does.
    pub fn group(&self, outcome: Outcome) -> Option<&[Hypothesis]> {
        let group = &self.groups[outcome.as_usize()];
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    /// Consume the branch, yielding its non-empty outcome groups as
    /// fresh sub-populations for the recursive search.
    pub fn into_subpopulations(self) -> impl Iterator<Item = Population> {
        self.groups
            .into_iter()
            .filter(|g| !g.is_empty())
            .map(Population::from_hypotheses)
    }
}
