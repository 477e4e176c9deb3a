// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hypotheses and hypothesis populations.
//!
//! A hypothesis is one candidate explanation of the puzzle state: which
//! pearl is counterfeit, and whether it is heavy or light. Conceptually a
//! hypothesis is a weight signature over the `n` pearls with exactly one
//! nonzero entry in {-1, +1}; since all other entries are zero we store
//! only the pearl index and the sign. The invalid all-zero signature is
//! unrepresentable by construction.
//!
//! A [`Population`] is the set of hypotheses still consistent with every
//! weighing performed so far. Populations are immutable once built: each
//! weighing partitions a population into fresh sub-populations (see
//! [`crate::outcome::Branch`]) rather than mutating it in place. A valid
//! search never sees an empty population, because the true hypothesis is
//! always consistent with the observed outcomes.

use std::fmt;

/// Direction of the counterfeit pearl's weight deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarity {
    /// The counterfeit pearl is heavier than a genuine pearl.
    Heavy,
    /// The counterfeit pearl is lighter than a genuine pearl.
    Light,
}

impl Polarity {
    /// Signed weight deviation: +1 for [`Polarity::Heavy`], -1 for [`Polarity::Light`].
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Heavy => 1,
            Polarity::Light => -1,
        }
    }
}

/// One candidate explanation: pearl `pearl` is counterfeit with the given polarity.
///
/// Two hypotheses that differ only in polarity at the same pearl are
/// distinct; resolving the puzzle means narrowing the population down to a
/// single hypothesis, direction included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hypothesis {
    /// Index of the counterfeit pearl, in `0..n`.
    pub pearl: usize,
    /// Whether that pearl is heavy or light.
    pub polarity: Polarity,
}

impl Hypothesis {
    /// Create a hypothesis for the given pearl and polarity.
    pub fn new(pearl: usize, polarity: Polarity) -> Self {
        Self { pearl, polarity }
    }

    /// Weight-signature entry for pearl `i`: the polarity's sign at the
    /// counterfeit pearl, zero everywhere else.
    pub fn weight(&self, i: usize) -> i32 {
        if i == self.pearl {
            self.polarity.sign()
        } else {
            0
        }
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.polarity {
            Polarity::Heavy => '+',
            Polarity::Light => '-',
        };
        write!(f, "{}{}", self.pearl, tag)
    }
}

/// An ordered, duplicate-free set of hypotheses.
///
/// Order is first-seen order and is preserved through partitioning, so the
/// search is deterministic. Duplicate-freedom is an invariant maintained by
/// the two constructors that matter: [`Population::initial`] builds 2n
/// distinct hypotheses, and partitioning assigns each hypothesis to exactly
/// one outcome group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population(Vec<Hypothesis>);

impl Population {
    /// The root population for an `n`-pearl puzzle: for each pearl index,
    /// one `Heavy` and one `Light` hypothesis, 2n hypotheses in total.
    ///
    /// Callers must not pass `n <= 2`; those degenerate sizes are rejected
    /// at the [`crate::solver::solve_puzzle`] boundary before any
    /// population is built.
    pub fn initial(n: usize) -> Self {
        let mut hypotheses = Vec::with_capacity(2 * n);
        for pearl in 0..n {
            hypotheses.push(Hypothesis::new(pearl, Polarity::Heavy));
            hypotheses.push(Hypothesis::new(pearl, Polarity::Light));
        }
        Self(hypotheses)
    }

    /// Build a population from an arbitrary list of hypotheses, dropping
    /// duplicates while preserving first-seen order.
    pub fn new(hypotheses: Vec<Hypothesis>) -> Self {
        let mut distinct: Vec<Hypothesis> = Vec::with_capacity(hypotheses.len());
        for hypothesis in hypotheses {
            if !distinct.contains(&hypothesis) {
                distinct.push(hypothesis);
            }
        }
        Self(distinct)
    }

    /// Build a population from hypotheses already known to be distinct.
    pub(crate) fn from_hypotheses(hypotheses: Vec<Hypothesis>) -> Self {
        Self(hypotheses)
    }

    /// Number of hypotheses not yet ruled out.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when a single hypothesis remains: the counterfeit pearl and its
    /// direction are fully determined, and the search terminates at cost 0.
    pub fn is_decided(&self) -> bool {
        self.0.len() == 1
    }

    /// Iterate over the hypotheses in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Hypothesis> {
        self.0.iter()
    }

    /// The hypotheses sorted by (pearl, polarity), used as a canonical memo
    /// key: two populations with the same hypothesis set reached along
    /// different weighing paths canonicalize identically.
    pub(crate) fn canonical_key(&self) -> Vec<Hypothesis> {
        let mut key = self.0.clone();
        key.sort_unstable();
        key
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Hypothesis;
    type IntoIter = std::slice::Iter<'a, Hypothesis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
