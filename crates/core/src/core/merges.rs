//! Symbols and merge pairs.
//!
//! A symbol is a plain `u32`: values below [`LEAF_COUNT`] are raw bytes, every
//! other value names a merge entry in the vocabulary table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a raw byte (0-255) or a merge entry (>= 256).
pub type Symbol = u32;

/// Number of literal byte leaves seeded into every vocabulary table.
pub const LEAF_COUNT: usize = 256;

/// An ordered pair of adjacent symbols.
///
/// Used both as a merge definition inside the vocabulary table and as the
/// key of the per-round frequency map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    pub left: Symbol,
    pub right: Symbol,
}

impl Pair {
    /// Create a new pair.
    #[inline]
    pub const fn new(left: Symbol, right: Symbol) -> Self {
        Self { left, right }
    }

    /// The self-referential entry stored at leaf index `byte`.
    #[inline]
    pub const fn leaf(byte: u8) -> Self {
        Self {
            left: byte as Symbol,
            right: 0,
        }
    }

    /// Check whether `(first, second)` is this pair.
    #[inline]
    pub fn matches(&self, first: Symbol, second: Symbol) -> bool {
        self.left == first && self.right == second
    }
}

impl From<(Symbol, Symbol)> for Pair {
    fn from((left, right): (Symbol, Symbol)) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_pair() {
        let leaf = Pair::leaf(b'a');
        assert_eq!(leaf.left, 97);
        assert_eq!(leaf.right, 0);
    }

    #[test]
    fn test_matches_is_ordered() {
        let pair = Pair::new(1, 2);
        assert!(pair.matches(1, 2));
        assert!(!pair.matches(2, 1));
        assert_eq!(Pair::from((1, 2)), pair);
        assert_eq!(pair.to_string(), "(1, 2)");
    }
}
