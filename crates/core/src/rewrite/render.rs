//! Turning token sequences back into bytes.
//!
//! [`render`] shows one level of structure: leaves as their byte, merges as a
//! bracketed id. [`decode`] expands every merge down to its bytes. They are
//! deliberately separate; only `decode` reproduces the original input.

use crate::core::merges::{Symbol, LEAF_COUNT};
use crate::core::vocab::VocabularyTable;
use crate::error::{Result, TokenizerError};
use std::io::Write;

/// Render `seq` as literal bytes for leaves and `[<id>]` for merge symbols.
pub fn render(table: &VocabularyTable, seq: &[Symbol]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());

    for &symbol in seq {
        let pair = table.entry(symbol)?;
        if pair.left != symbol {
            // Writing into a Vec cannot fail.
            let _ = write!(out, "[{}]", symbol);
        } else if (symbol as usize) < LEAF_COUNT {
            out.push(symbol as u8);
        } else {
            return Err(TokenizerError::CyclicReference { symbol });
        }
    }

    Ok(out)
}

/// Fully expand `seq` to the bytes it was built from.
pub fn decode(table: &VocabularyTable, seq: &[Symbol]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len() * 2);
    for &symbol in seq {
        table.expand_into(symbol, &mut out)?;
    }
    Ok(out)
}
