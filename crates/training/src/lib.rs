//! Pairfold-training - byte-pair merge loop
//!
//! This crate learns merges from raw bytes: it counts adjacent pairs, picks
//! the most frequent one, appends it to the vocabulary table and rewrites the
//! sequence, round after round.
//!
//! # Features
//!
//! - Pair counting with first-occurrence ordering for deterministic tie-breaks
//! - Frequency-driven termination with an optional round cap
//! - Single-step API so callers can stop between rounds
//!
//! # Example
//!
//! ```rust
//! use pairfold_training::{MergeTrainer, TrainingConfig};
//!
//! let trainer = MergeTrainer::new(TrainingConfig::default())?;
//! let outcome = trainer.train(b"aaabdaaabac")?;
//! assert_eq!(outcome.tokens.len(), 5);
//! # Ok::<(), pairfold_training::TokenizerError>(())
//! ```

pub use pairfold_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    FrequencyMap, HaltReason, MergeCandidate, MergeRecord, MergeSelector, MergeTrainer,
    PairFrequencyCounter, RoundResult, Selection, TrainingConfig, TrainingOutcome,
};
