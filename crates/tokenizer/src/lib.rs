//! Pairfold-tokenizer - High-level byte-pair tokenizer API
//!
//! This crate wraps the merge trainer and the vocabulary table in a single
//! `Tokenizer` type, and owns the on-disk formats.
//!
//! # Features
//!
//! - Builder for the training configuration (threshold, round cap)
//! - Training, encoding of new input, full decoding and one-level rendering
//! - Binary vocabulary and token files, DOT merge graphs, JSON configs
//!
//! # Example
//!
//! ```rust
//! use pairfold_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().max_rounds(100).build()?;
//! let encoding = tokenizer.train(b"aaabdaaabac")?;
//!
//! assert_eq!(encoding.len(), 5);
//! assert_eq!(tokenizer.decode(&encoding.ids)?, b"aaabdaaabac");
//! assert_eq!(tokenizer.render(&encoding.ids)?, b"[258]d[258]ac");
//! # Ok::<(), pairfold_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use pairfold_core::{Edge, Result, Symbol, TokenizerError, VocabularyTable};
pub use pairfold_training::{
    FrequencyMap, HaltReason, MergeRecord, PairFrequencyCounter, TrainingConfig,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder};

// IO/Serialization
pub mod io;
pub use io::{VocabLoader, VocabSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
