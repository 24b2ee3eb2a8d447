//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the merge
//! trainer, the learned vocabulary table and the sequence rewriter together.

use crate::io::{VocabLoader, VocabSaver, DEFAULT_GRAPH_NAME};
use pairfold_core::{
    apply_merge, decode, export_graph, render, to_dot, Edge, Result, Symbol, VocabularyTable,
};
use pairfold_training::{HaltReason, MergeRecord, MergeTrainer, TrainingConfig};
use std::path::Path;

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TrainingConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing training configuration.
    pub fn config(mut self, config: TrainingConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Cap training at `rounds` merges.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = Some(rounds);
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// Holds a vocabulary table (only byte leaves until trained or loaded) and
/// the configuration used for training.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Vocabulary
    vocab: VocabularyTable,
    /// Trainer built from the configuration
    trainer: MergeTrainer,
}

impl Tokenizer {
    /// Create an untrained tokenizer with the given configuration.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        Ok(Self {
            vocab: VocabularyTable::new(),
            trainer: MergeTrainer::new(config)?,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Wrap an existing vocabulary after checking its invariants.
    pub fn from_vocab(vocab: VocabularyTable, config: TrainingConfig) -> Result<Self> {
        vocab.validate()?;
        Ok(Self {
            vocab,
            trainer: MergeTrainer::new(config)?,
        })
    }

    /// Learn merges from `data`, replacing any previous vocabulary.
    ///
    /// Returns the compressed form of `data`.
    pub fn train(&mut self, data: &[u8]) -> Result<Encoding> {
        let outcome = self.trainer.train(data)?;
        self.vocab = outcome.vocab;

        Ok(Encoding {
            ids: outcome.tokens,
            history: outcome.history,
            halt: outcome.halt,
        })
    }

    /// Compress `data` by replaying every learned merge in the order it was learned.
    pub fn encode(&self, data: &[u8]) -> Vec<Symbol> {
        let mut ids: Vec<Symbol> = data.iter().map(|&b| b as Symbol).collect();

        for (symbol, pair) in self.vocab.merges() {
            if ids.len() < 2 {
                break;
            }
            ids = apply_merge(&ids, pair, symbol);
        }

        ids
    }

    /// Fully expand token IDs back to the original bytes.
    pub fn decode(&self, ids: &[Symbol]) -> Result<Vec<u8>> {
        decode(&self.vocab, ids)
    }

    /// Render token IDs one level deep: bytes for leaves, `[id]` for merges.
    pub fn render(&self, ids: &[Symbol]) -> Result<Vec<u8>> {
        render(&self.vocab, ids)
    }

    /// Export the merge graph as a list of edges.
    pub fn export_graph(&self) -> Result<Vec<Edge>> {
        export_graph(&self.vocab)
    }

    /// Export the merge graph as DOT text.
    pub fn to_dot(&self) -> Result<String> {
        Ok(to_dot(&self.export_graph()?, DEFAULT_GRAPH_NAME))
    }

    /// Get the vocabulary size (leaves included).
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &VocabularyTable {
        &self.vocab
    }

    /// Get the training configuration.
    pub fn config(&self) -> &TrainingConfig {
        self.trainer.config()
    }

    /// Save the vocabulary to a binary file.
    pub fn save(&self, path: &Path) -> Result<()> {
        VocabSaver::new(&self.vocab).save_vocab(path)
    }

    /// Load a vocabulary file and check its invariants.
    pub fn load(path: &Path) -> Result<Self> {
        let vocab = VocabLoader::load_vocab(path)?;
        Self::from_vocab(vocab, TrainingConfig::default())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            vocab: VocabularyTable::new(),
            trainer: MergeTrainer::with_defaults(),
        }
    }
}

/// Result of training on text.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<Symbol>,
    /// Merge rounds that produced these IDs
    pub history: Vec<MergeRecord>,
    /// Why training stopped
    pub halt: HaltReason,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of merge rounds performed.
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairfold_core::{Pair, TokenizerError};

    const WIKI: &[u8] = b"The original BPE algorithm operates by iteratively replacing the most \
        common contiguous sequences of characters in a target text with unused placeholder bytes.";

    #[test]
    fn test_builder() {
        let tokenizer = Tokenizer::builder()
            .min_frequency(3)
            .max_rounds(10)
            .build()
            .unwrap();

        assert_eq!(tokenizer.vocab_size(), 256);
        assert_eq!(tokenizer.config().min_frequency, 3);
        assert_eq!(tokenizer.config().max_rounds, Some(10));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let result = Tokenizer::builder().min_frequency(1).build();
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));
    }

    #[test]
    fn test_train_decode_roundtrip() {
        let mut tokenizer = Tokenizer::default();
        let encoding = tokenizer.train(WIKI).unwrap();

        assert!(encoding.rounds() > 0);
        assert!(encoding.len() < WIKI.len());
        assert_eq!(tokenizer.vocab_size(), 256 + encoding.rounds());
        assert_eq!(tokenizer.decode(&encoding.ids).unwrap(), WIKI);
    }

    #[test]
    fn test_encode_replays_training() {
        let mut tokenizer = Tokenizer::default();
        let encoding = tokenizer.train(b"aaabdaaabac").unwrap();

        assert_eq!(tokenizer.encode(b"aaabdaaabac"), encoding.ids);
    }

    #[test]
    fn test_encode_new_text() {
        let mut tokenizer = Tokenizer::default();
        tokenizer.train(b"aaabdaaabac").unwrap();

        // 258 = aaab
        let ids = tokenizer.encode(b"aaabxaaab");
        assert_eq!(ids, vec![258, b'x' as Symbol, 258]);
        assert_eq!(tokenizer.decode(&ids).unwrap(), b"aaabxaaab");
        assert!(tokenizer.encode(b"").is_empty());
    }

    #[test]
    fn test_render_and_graph() {
        let mut tokenizer = Tokenizer::default();
        let encoding = tokenizer.train(b"aaabdaaabac").unwrap();

        assert_eq!(tokenizer.render(&encoding.ids).unwrap(), b"[258]d[258]ac");
        assert_eq!(
            tokenizer.export_graph().unwrap(),
            vec![
                Edge::new(256, 97),
                Edge::new(256, 97),
                Edge::new(257, 256),
                Edge::new(257, 97),
                Edge::new(258, 257),
                Edge::new(258, 98),
            ]
        );
        assert!(tokenizer.to_dot().unwrap().starts_with("digraph \"Merges\" {\n"));
    }

    #[test]
    fn test_round_limit() {
        let mut tokenizer = Tokenizer::builder().max_rounds(2).build().unwrap();
        let encoding = tokenizer.train(WIKI).unwrap();

        assert_eq!(encoding.rounds(), 2);
        assert_eq!(encoding.halt, HaltReason::RoundLimit { rounds: 2 });
        assert_eq!(tokenizer.decode(&encoding.ids).unwrap(), WIKI);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path =
            std::env::temp_dir().join(format!("pairfold_tokenizer_{}.bin", std::process::id()));

        let mut tokenizer = Tokenizer::default();
        let encoding = tokenizer.train(WIKI).unwrap();
        tokenizer.save(&path).unwrap();

        let loaded = Tokenizer::load(&path).unwrap();
        assert_eq!(loaded.vocab(), tokenizer.vocab());
        assert_eq!(loaded.decode(&encoding.ids).unwrap(), WIKI);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_corrupted_vocab() {
        let path =
            std::env::temp_dir().join(format!("pairfold_corrupt_{}.bin", std::process::id()));

        let mut entries = VocabularyTable::new().entries().to_vec();
        entries.push(Pair::new(300, 97));
        VocabularyTable::from_entries(entries)
            .serialize(&path)
            .unwrap();

        assert!(matches!(
            Tokenizer::load(&path),
            Err(TokenizerError::InvalidMerge(_))
        ));

        std::fs::remove_file(&path).ok();
    }
}
