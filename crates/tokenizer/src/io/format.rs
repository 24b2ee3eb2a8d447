//! On-disk formats.
//!
//! - Vocabulary: flat 8-byte records, see [`pairfold_core::RECORD_SIZE`]
//! - Tokens: flat 4-byte little-endian symbols, no header
//! - Graph: DOT text
//! - Config: JSON form of [`TrainingConfig`]

use pairfold_core::{Result, Symbol, TokenizerError};
use pairfold_training::TrainingConfig;

/// Size in bytes of one persisted token.
pub const TOKEN_RECORD_SIZE: usize = 4;

/// Default name of the exported DOT graph.
pub const DEFAULT_GRAPH_NAME: &str = "Merges";

/// Encode a token sequence as little-endian `u32` records.
pub fn tokens_to_bytes(tokens: &[Symbol]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(tokens.len() * TOKEN_RECORD_SIZE);
    for token in tokens {
        bytes.extend_from_slice(&token.to_le_bytes());
    }
    bytes
}

/// Decode a token sequence from little-endian `u32` records.
pub fn tokens_from_bytes(bytes: &[u8]) -> Result<Vec<Symbol>> {
    if bytes.len() % TOKEN_RECORD_SIZE != 0 {
        return Err(TokenizerError::Format(format!(
            "token data is {} bytes, not a multiple of the {}-byte record size",
            bytes.len(),
            TOKEN_RECORD_SIZE
        )));
    }

    Ok(bytes
        .chunks_exact(TOKEN_RECORD_SIZE)
        .map(|record| Symbol::from_le_bytes([record[0], record[1], record[2], record[3]]))
        .collect())
}

/// Parse a training configuration from JSON. Missing fields take their defaults.
pub fn config_from_json(json: &str) -> Result<TrainingConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a training configuration as pretty JSON.
pub fn config_to_json(config: &TrainingConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
