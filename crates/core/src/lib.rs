//! Pairfold-core - Core byte-pair merge data structures
//!
//! This crate provides the data model shared by the rest of the workspace:
//! symbols, merge pairs, the append-only vocabulary table with its binary
//! record format, and the sequence rewriter.
//!
//! # Features
//!
//! - Flat vocabulary arena with strict back-references (acyclic by construction)
//! - Explicit little-endian record codec for persistence
//! - Greedy non-overlapping merge application
//! - One-level rendering, full decoding and merge graph export
//!
//! # Example
//!
//! ```rust
//! use pairfold_core::{apply_merge, decode, Pair, VocabularyTable};
//!
//! let mut vocab = VocabularyTable::new();
//! let pair = Pair::new(b'a' as u32, b'b' as u32);
//! let ab = vocab.append_merge(pair)?;
//!
//! let seq: Vec<u32> = b"abab".iter().map(|&b| b as u32).collect();
//! let merged = apply_merge(&seq, pair, ab);
//! assert_eq!(merged, vec![ab, ab]);
//! assert_eq!(decode(&vocab, &merged)?, b"abab");
//! # Ok::<(), pairfold_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Data model
pub mod core;
pub use core::{Pair, Symbol, VocabularyTable, LEAF_COUNT, RECORD_SIZE};

// Sequence rewriting
pub mod rewrite;
pub use rewrite::{apply_merge, count_matches, decode, export_graph, render, to_dot, Edge};
