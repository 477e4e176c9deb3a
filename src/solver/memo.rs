// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Optional memoization of solved populations.
//!
//! The baseline search re-solves structurally identical populations
//! reached along different weighing paths. When memoization is enabled the
//! solver caches each population's cost under its canonical key (the
//! hypotheses sorted by pearl and polarity), so each distinct population
//! is solved at most once. This is a pure cache: enabling it must never
//! change an answer, only the amount of work done.

use crate::hypothesis::Hypothesis;
use rustc_hash::FxHashMap;

/// Cache of population cost results, keyed by canonical hypothesis lists.
#[derive(Debug, Default)]
pub(crate) struct MemoTable {
    table: FxHashMap<Vec<Hypothesis>, usize>,
    hits: u64,
}

impl MemoTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up a previously solved population.
    pub(crate) fn get(&mut self, key: &[Hypothesis]) -> Option<usize> {
        let cost = self.table.get(key).copied();
        if cost.is_some() {
            self.hits += 1;
        }
        cost
    }

    /// Record the cost of a solved population.
    pub(crate) fn insert(&mut self, key: Vec<Hypothesis>, cost: usize) {
        self.table.insert(key, cost);
    }

    /// Number of cache hits so far.
    pub(crate) fn hits(&self) -> u64 {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::{Hypothesis, Polarity};

    #[test]
    fn test_miss_then_hit() {
        let mut memo = MemoTable::new();
        let key = vec![
            Hypothesis::new(0, Polarity::Heavy),
            Hypothesis::new(1, Polarity::Light),
        ];
        assert_eq!(memo.get(&key), None);
        assert_eq!(memo.hits(), 0);

        memo.insert(key.clone(), 2);
        assert_eq!(memo.get(&key), Some(2));
        assert_eq!(memo.hits(), 1);
    }
}
