//! Core data model for byte-pair merging.
//!
//! This module contains the symbol and pair types and the append-only
//! vocabulary table they are stored in.

pub mod merges;
pub mod vocab;

pub use merges::{Pair, Symbol, LEAF_COUNT};
pub use vocab::{VocabularyTable, RECORD_SIZE};
