//! Load functionality for learned vocabularies.
//!
//! Loading performs no invariant checks; see [`VocabularyTable::validate`].

use super::format::{config_from_json, tokens_from_bytes};
use pairfold_core::{Result, Symbol, TokenizerError, VocabularyTable};
use pairfold_training::TrainingConfig;
use std::path::Path;

/// Vocabulary loader - reads files written by [`super::VocabSaver`].
pub struct VocabLoader;

impl VocabLoader {
    /// Load a binary vocabulary file.
    pub fn load_vocab(path: &Path) -> Result<VocabularyTable> {
        VocabularyTable::deserialize(path)
    }

    /// Load a binary token file.
    pub fn load_tokens(path: &Path) -> Result<Vec<Symbol>> {
        let bytes = std::fs::read(path).map_err(|e| TokenizerError::io(path, e))?;
        let tokens = tokens_from_bytes(&bytes)?;
        log::debug!("read {} tokens from {}", tokens.len(), path.display());
        Ok(tokens)
    }

    /// Load a JSON training configuration.
    pub fn load_config(path: &Path) -> Result<TrainingConfig> {
        let json = std::fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
        config_from_json(&json)
    }
}
