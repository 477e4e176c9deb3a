// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of candidate weighings.
//!
//! A weighing places two disjoint, equal-size, non-empty groups of pearls
//! on the two pans of the balance; pearls in neither group sit idle for
//! that weighing. For group size `k` (with `1 <= k <= n/2`) the enumerator
//! picks every `2k`-subset of the pearls and every way to split it into
//! halves, emitting each split exactly once: the half containing the
//! smallest involved pearl is always the left pan, so the mirror image of
//! an emitted weighing (pans swapped) is never emitted separately. Mirrors
//! carry no extra information because their outcomes are reflections of
//! each other.
//!
//! The same idle set can recur across different `k`; such duplicates are
//! accepted, since they only cost redundant work at the cost-comparison
//! stage of the search and never affect the answer.
//!
//! Enumeration is lazy: [`weighings`] returns a fresh finite iterator on
//! every call and produces candidates on demand, so nothing is
//! materialized up front even when the combinatorial count is large.

use itertools::Itertools;
use std::fmt;

/// One placement of pearls on the balance: a left pan and a right pan.
///
/// Invariants: the groups are disjoint, equal in size, non-empty, and each
/// is sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weighing {
    left: Vec<usize>,
    right: Vec<usize>,
}

impl Weighing {
    /// Create a weighing from two pan groups.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if the groups are empty, of unequal size,
    /// or not disjoint.
    pub fn new(left: Vec<usize>, right: Vec<usize>) -> Self {
        debug_assert!(!left.is_empty(), "empty pan group");
        debug_assert_eq!(left.len(), right.len(), "unequal pan groups");
        debug_assert!(
            left.iter().all(|p| !right.contains(p)),
            "pan groups overlap"
        );
        Self { left, right }
    }

    /// Pearls on the left pan, sorted ascending.
    pub fn left(&self) -> &[usize] {
        &self.left
    }

    /// Pearls on the right pan, sorted ascending.
    pub fn right(&self) -> &[usize] {
        &self.right
    }

    /// Number of pearls on each pan.
    pub fn group_size(&self) -> usize {
        self.left.len()
    }
}

impl fmt::Display for Weighing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} vs {:?}", self.left, self.right)
    }
}

/// All combinatorially distinct weighings of `n` pearls, lazily.
///
/// Deterministic: group sizes ascending, subsets and splits in
/// lexicographic order. Each call returns a fresh iterator, so the
/// sequence is restartable. For `n < 2` the iterator is empty.
pub fn weighings(n: usize) -> impl Iterator<Item = Weighing> {
    (1..=n / 2).flat_map(move |k| {
        (0..n).combinations(2 * k).flat_map(move |involved| {
            // Pinning the smallest involved pearl to the left pan picks one
            // representative from each mirror pair of splits.
            let anchor = involved[0];
            let rest: Vec<usize> = involved[1..].to_vec();
            rest.into_iter().combinations(k - 1).map(move |tail| {
                let mut left = Vec::with_capacity(k);
                left.push(anchor);
                left.extend(tail);
                let right: Vec<usize> = involved
                    .iter()
                    .copied()
                    .filter(|p| !left.contains(p))
                    .collect();
                Weighing::new(left, right)
            })
        })
    })
}
