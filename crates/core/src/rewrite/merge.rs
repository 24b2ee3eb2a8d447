//! Sequence rewriting for a single merge.
//!
//! Both functions share one scan: left to right, non-overlapping, and a
//! matched pair is consumed whole so its right half is never reconsidered.

use crate::core::merges::{Pair, Symbol};

/// Replace every non-overlapping occurrence of `pair` in `seq` with `new_symbol`.
///
/// The output length is `seq.len() - count_matches(seq, pair)`.
pub fn apply_merge(seq: &[Symbol], pair: Pair, new_symbol: Symbol) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(seq.len());
    let mut i = 0;

    while i < seq.len() {
        if i + 1 < seq.len() && pair.matches(seq[i], seq[i + 1]) {
            out.push(new_symbol);
            i += 2;
        } else {
            out.push(seq[i]);
            i += 1;
        }
    }

    out
}

/// Count the rewrites [`apply_merge`] would perform for `pair`.
pub fn count_matches(seq: &[Symbol], pair: Pair) -> usize {
    let mut matches = 0;
    let mut i = 0;

    while i + 1 < seq.len() {
        if pair.matches(seq[i], seq[i + 1]) {
            matches += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    matches
}
