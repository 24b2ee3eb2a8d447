//! Merge candidate selection.

use super::counter::FrequencyMap;
use pairfold_core::{Pair, Result, TokenizerError};
use std::fmt;

/// The lowest threshold that still guarantees every merge compresses.
pub const DEFAULT_MIN_FREQUENCY: u64 = 2;

/// A merge candidate: a pair and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of symbols to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

/// Why a merge loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The sequence has fewer than two symbols left.
    NoPairs,
    /// The most frequent pair occurs fewer than `min_frequency` times.
    BelowThreshold { best: MergeCandidate },
    /// The configured round cap was reached.
    RoundLimit { rounds: usize },
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPairs => write!(f, "no adjacent pairs left"),
            Self::BelowThreshold { best } => write!(
                f,
                "most frequent pair {} occurs only {} time(s)",
                best.pair, best.count
            ),
            Self::RoundLimit { rounds } => write!(f, "round limit of {} reached", rounds),
        }
    }
}

/// Outcome of one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Merge this candidate.
    Merge(MergeCandidate),
    /// Stop the loop.
    Halt(HaltReason),
}

/// Picks the most frequent pair, keeping the earliest pair on ties.
#[derive(Debug, Clone, Copy)]
pub struct MergeSelector {
    min_frequency: u64,
}

impl MergeSelector {
    /// Create a selector that halts once the best count drops below `min_frequency`.
    ///
    /// A threshold below 2 would merge pairs that occur once, which cannot
    /// compress anything, so it is rejected.
    pub fn new(min_frequency: u64) -> Result<Self> {
        if min_frequency < DEFAULT_MIN_FREQUENCY {
            return Err(TokenizerError::InvalidConfig(format!(
                "min_frequency must be at least {}, got {}",
                DEFAULT_MIN_FREQUENCY, min_frequency
            )));
        }
        Ok(Self { min_frequency })
    }

    /// The halting threshold.
    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    /// Select the entry with the strictly highest count.
    ///
    /// Entries are scanned in first-occurrence order and only a strictly
    /// greater count replaces the current best.
    pub fn select(freqs: &FrequencyMap) -> Option<MergeCandidate> {
        let mut best: Option<MergeCandidate> = None;

        for (pair, count) in freqs.iter() {
            match best {
                Some(current) if count <= current.count => {}
                _ => best = Some(MergeCandidate::new(pair, count)),
            }
        }

        best
    }

    /// Decide whether the round should merge or the loop should halt.
    pub fn decide(&self, freqs: &FrequencyMap) -> Selection {
        match Self::select(freqs) {
            None => Selection::Halt(HaltReason::NoPairs),
            Some(best) if best.count < self.min_frequency => {
                Selection::Halt(HaltReason::BelowThreshold { best })
            }
            Some(best) => Selection::Merge(best),
        }
    }
}

impl Default for MergeSelector {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
        }
    }
}
