//! Pair counting for BPE training.
//!
//! Counts are rebuilt from scratch every round and iterate in the order each
//! distinct pair first appears, which is what the selector's tie-break relies on.

use ahash::AHashMap;
use pairfold_core::{Pair, Symbol};

/// Pair -> occurrence count, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    /// Pair -> position in `counts`
    index: AHashMap<Pair, usize>,
    /// Counts in insertion order
    counts: Vec<(Pair, u64)>,
}

impl FrequencyMap {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new map with capacity for `capacity` distinct pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: AHashMap::with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
        }
    }

    /// Add one occurrence of `pair`.
    pub fn increment(&mut self, pair: Pair) {
        match self.index.get(&pair) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(pair, self.counts.len());
                self.counts.push((pair, 1));
            }
        }
    }

    /// Get the count for a pair.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<u64> {
        self.index.get(&pair).map(|&slot| self.counts[slot].1)
    }

    /// Number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no pair was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(pair, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, u64)> + '_ {
        self.counts.iter().copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// The `n` most frequent pairs, highest count first.
    ///
    /// Equal counts keep first-occurrence order, so `top(1)` agrees with the
    /// selector's pick.
    pub fn top(&self, n: usize) -> Vec<(Pair, u64)> {
        let mut ranked = self.counts.clone();
        // Stable sort keeps insertion order among ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Counter for adjacent pair frequencies in a token sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairFrequencyCounter;

impl PairFrequencyCounter {
    /// Count every adjacent pair of `seq`, scanning left to right.
    ///
    /// Overlapping windows are all counted; sequences shorter than two
    /// symbols produce an empty map.
    pub fn count(seq: &[Symbol]) -> FrequencyMap {
        let mut freqs = FrequencyMap::with_capacity(seq.len().min(1 << 16));

        for window in seq.windows(2) {
            freqs.increment(Pair::new(window[0], window[1]));
        }

        freqs
    }
}
