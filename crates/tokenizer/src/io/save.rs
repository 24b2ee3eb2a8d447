//! Save functionality for learned vocabularies.
//!
//! This module writes vocabularies, compressed token sequences, merge
//! graphs and training configurations to disk.

use super::format::{config_to_json, tokens_to_bytes};
use pairfold_core::{export_graph, to_dot, Result, Symbol, TokenizerError, VocabularyTable};
use pairfold_training::TrainingConfig;
use std::path::Path;

/// Vocabulary saver - writes a learned table and its companions.
pub struct VocabSaver<'a> {
    /// Vocabulary reference
    vocab: &'a VocabularyTable,
}

impl<'a> VocabSaver<'a> {
    /// Create a new saver.
    pub fn new(vocab: &'a VocabularyTable) -> Self {
        Self { vocab }
    }

    /// Save the vocabulary as binary records.
    pub fn save_vocab(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        self.vocab.serialize(path)
    }

    /// Save the merge graph as a DOT file.
    pub fn save_graph(&self, path: &Path, name: &str) -> Result<()> {
        let edges = export_graph(self.vocab)?;
        write_file(path, to_dot(&edges, name).as_bytes())?;
        log::debug!("wrote {} graph edges to {}", edges.len(), path.display());
        Ok(())
    }
}

/// Save a token sequence as little-endian `u32` records.
pub fn save_tokens(tokens: &[Symbol], path: &Path) -> Result<()> {
    write_file(path, &tokens_to_bytes(tokens))?;
    log::debug!("wrote {} tokens to {}", tokens.len(), path.display());
    Ok(())
}

/// Save a training configuration as JSON.
pub fn save_config(config: &TrainingConfig, path: &Path) -> Result<()> {
    write_file(path, config_to_json(config)?.as_bytes())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, contents).map_err(|e| TokenizerError::io(path, e))
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| TokenizerError::io(parent, e))
        }
        _ => Ok(()),
    }
}
