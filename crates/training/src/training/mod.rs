//! Training infrastructure for byte-pair merging.
//!
//! This module provides the per-round pair counter, the merge selector and
//! the merge loop that ties them to the vocabulary table.

pub mod counter;
pub mod selector;
pub mod trainer;

pub use counter::{FrequencyMap, PairFrequencyCounter};
pub use selector::{HaltReason, MergeCandidate, MergeSelector, Selection, DEFAULT_MIN_FREQUENCY};
pub use trainer::{MergeRecord, MergeTrainer, RoundResult, TrainingConfig, TrainingOutcome};
