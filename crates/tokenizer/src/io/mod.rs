//! Persistence for learned vocabularies.
//!
//! This module reads and writes the binary vocabulary and token files, the
//! DOT merge graph and JSON training configurations.

pub mod format;
pub mod load;
pub mod save;

pub use format::{
    config_from_json, config_to_json, tokens_from_bytes, tokens_to_bytes, DEFAULT_GRAPH_NAME,
    TOKEN_RECORD_SIZE,
};
pub use load::VocabLoader;
pub use save::{save_config, save_tokens, VocabSaver};
