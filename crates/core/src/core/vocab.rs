//! Vocabulary table storage, persistence and expansion.
//!
//! The table is a flat arena of [`Pair`] entries indexed by [`Symbol`].
//! Indices below [`LEAF_COUNT`] are self-referential byte leaves; every later
//! entry is a merge of two strictly earlier entries, so the reference graph is
//! acyclic and every symbol expands to a finite byte string.

use crate::core::merges::{Pair, Symbol, LEAF_COUNT};
use crate::error::{Result, TokenizerError};
use std::path::Path;

/// Size in bytes of one persisted vocabulary record (two `u32` fields).
pub const RECORD_SIZE: usize = 8;

/// Append-only table of merge definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyTable {
    entries: Vec<Pair>,
}

impl VocabularyTable {
    /// Create a table seeded with the 256 byte leaves.
    pub fn new() -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(LEAF_COUNT),
        };
        table.initialize();
        table
    }

    /// Reset the table to exactly the 256 self-referential byte leaves.
    pub fn initialize(&mut self) {
        self.entries.clear();
        self.entries.extend((0..=u8::MAX).map(Pair::leaf));
    }

    /// Build a table from raw entries without checking any invariant.
    ///
    /// Use [`VocabularyTable::validate`] before trusting data from outside.
    pub fn from_entries(entries: Vec<Pair>) -> Self {
        Self { entries }
    }

    /// Append a merge entry and return its new symbol id.
    ///
    /// Both sides of `pair` must name entries that already exist.
    pub fn append_merge(&mut self, pair: Pair) -> Result<Symbol> {
        let tried = self.entries.len();
        let new_id = Symbol::try_from(tried).map_err(|_| TokenizerError::VocabularyOverflow {
            max: Symbol::MAX as usize,
            tried,
        })?;

        if pair.left >= new_id || pair.right >= new_id {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair {} must reference entries below {}",
                pair, new_id
            )));
        }

        self.entries.push(pair);
        Ok(new_id)
    }

    /// Get the entry for a symbol.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<Pair> {
        self.entries.get(symbol as usize).copied()
    }

    /// Get the entry for a symbol, failing if it is outside the table.
    #[inline]
    pub fn entry(&self, symbol: Symbol) -> Result<Pair> {
        self.get(symbol).ok_or(TokenizerError::UnknownSymbol {
            symbol,
            len: self.entries.len(),
        })
    }

    /// Check whether the entry for `symbol` is self-referential.
    #[inline]
    pub fn is_leaf(&self, symbol: Symbol) -> bool {
        self.get(symbol).is_some_and(|pair| pair.left == symbol)
    }

    /// Total number of entries, leaves included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of merge entries beyond the byte leaves.
    pub fn merge_count(&self) -> usize {
        self.entries.len().saturating_sub(LEAF_COUNT)
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[Pair] {
        &self.entries
    }

    /// Iterate over `(symbol, pair)` for every non-leaf entry in table order.
    pub fn merges(&self) -> impl Iterator<Item = (Symbol, Pair)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, &pair)| (i as Symbol, pair))
            .filter(|&(symbol, pair)| pair.left != symbol)
    }

    /// Check the leaf and back-reference invariants.
    ///
    /// Loading never calls this on its own; callers that accept files from
    /// outside decide whether a corrupted table is an error.
    pub fn validate(&self) -> Result<()> {
        if self.entries.len() < LEAF_COUNT {
            return Err(TokenizerError::InvalidMerge(format!(
                "table has {} entries, expected at least {} byte leaves",
                self.entries.len(),
                LEAF_COUNT
            )));
        }

        for (i, pair) in self.entries.iter().enumerate() {
            let symbol = i as Symbol;
            if i < LEAF_COUNT {
                if pair.left != symbol {
                    return Err(TokenizerError::InvalidMerge(format!(
                        "leaf {} is not self-referential: {}",
                        symbol, pair
                    )));
                }
            } else if pair.left >= symbol || pair.right >= symbol {
                return Err(TokenizerError::InvalidMerge(format!(
                    "entry {} does not reference earlier entries: {}",
                    symbol, pair
                )));
            }
        }

        Ok(())
    }

    /// Append the full byte expansion of `symbol` to `buf`.
    ///
    /// Expansion walks an explicit stack. Every merge entry visited must
    /// reference strictly smaller ids, so corrupted tables fail with
    /// [`TokenizerError::CyclicReference`] instead of looping.
    pub fn expand_into(&self, symbol: Symbol, buf: &mut Vec<u8>) -> Result<()> {
        let mut stack: Vec<Symbol> = Vec::with_capacity(16);
        stack.push(symbol);

        while let Some(t) = stack.pop() {
            let pair = self.entry(t)?;

            if pair.left == t {
                let byte =
                    u8::try_from(t).map_err(|_| TokenizerError::CyclicReference { symbol: t })?;
                buf.push(byte);
                continue;
            }

            if pair.left >= t || pair.right >= t {
                return Err(TokenizerError::CyclicReference { symbol: t });
            }

            stack.push(pair.right);
            stack.push(pair.left);
        }

        Ok(())
    }

    /// Expand a single symbol to the bytes it stands for.
    pub fn expand(&self, symbol: Symbol) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.expand_into(symbol, &mut buf)?;
        Ok(buf)
    }

    /// Encode the table as fixed-width little-endian records.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.entries.len() * RECORD_SIZE);
        for pair in &self.entries {
            bytes.extend_from_slice(&pair.left.to_le_bytes());
            bytes.extend_from_slice(&pair.right.to_le_bytes());
        }
        bytes
    }

    /// Decode a table from fixed-width little-endian records.
    ///
    /// Fails with [`TokenizerError::Format`] if the buffer length is not a
    /// multiple of [`RECORD_SIZE`]. Entry invariants are not checked.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(TokenizerError::Format(format!(
                "vocabulary data is {} bytes, not a multiple of the {}-byte record size",
                bytes.len(),
                RECORD_SIZE
            )));
        }

        let entries = bytes
            .chunks_exact(RECORD_SIZE)
            .map(|record| {
                let (left, right) = record.split_at(RECORD_SIZE / 2);
                Pair::new(read_u32_le(left), read_u32_le(right))
            })
            .collect();

        Ok(Self { entries })
    }

    /// Write the table to `path` as binary records.
    pub fn serialize(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes()).map_err(|e| TokenizerError::io(path, e))?;
        log::debug!(
            "wrote {} vocabulary records to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a table previously written by [`VocabularyTable::serialize`].
    pub fn deserialize(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| TokenizerError::io(path, e))?;
        let table = Self::from_bytes(&bytes)?;
        log::debug!(
            "read {} vocabulary records from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}

impl Default for VocabularyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one little-endian `u32` from a 4-byte slice.
#[inline]
fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(bytes);
    u32::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pairfold_vocab_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_initialize_leaves() {
        let table = VocabularyTable::new();
        assert_eq!(table.len(), LEAF_COUNT);
        assert_eq!(table.merge_count(), 0);
        for i in 0..LEAF_COUNT as Symbol {
            assert_eq!(table.get(i).unwrap().left, i);
            assert!(table.is_leaf(i));
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_append_merge_assigns_sequential_ids() {
        let mut table = VocabularyTable::new();
        let z = table.append_merge(Pair::new(97, 97)).unwrap();
        let y = table.append_merge(Pair::new(z, 98)).unwrap();

        assert_eq!(z, 256);
        assert_eq!(y, 257);
        assert_eq!(table.get(y), Some(Pair::new(256, 98)));
        assert!(!table.is_leaf(y));
        assert_eq!(table.merge_count(), 2);
    }

    #[test]
    fn test_append_merge_rejects_forward_reference() {
        let mut table = VocabularyTable::new();
        assert!(matches!(
            table.append_merge(Pair::new(256, 97)),
            Err(TokenizerError::InvalidMerge(_))
        ));
        assert_eq!(table.len(), LEAF_COUNT);
    }

    #[test]
    fn test_leaves_survive_appends() {
        let mut table = VocabularyTable::new();
        table.append_merge(Pair::new(1, 2)).unwrap();
        table.append_merge(Pair::new(256, 256)).unwrap();

        for i in 0..LEAF_COUNT as Symbol {
            assert_eq!(table.get(i).unwrap().left, i);
        }
    }

    #[test]
    fn test_merges_iterator_skips_leaves() {
        let mut table = VocabularyTable::new();
        table.append_merge(Pair::new(97, 97)).unwrap();
        table.append_merge(Pair::new(97, 98)).unwrap();

        let merges: Vec<_> = table.merges().collect();
        assert_eq!(
            merges,
            vec![(256, Pair::new(97, 97)), (257, Pair::new(97, 98))]
        );
    }

    #[test]
    fn test_expand_nested_merge() {
        let mut table = VocabularyTable::new();
        let z = table.append_merge(Pair::new(b'a' as Symbol, b'a' as Symbol)).unwrap();
        let y = table.append_merge(Pair::new(b'a' as Symbol, b'b' as Symbol)).unwrap();
        let x = table.append_merge(Pair::new(z, y)).unwrap();

        assert_eq!(table.expand(x).unwrap(), b"aaab");
        assert_eq!(table.expand(b'q' as Symbol).unwrap(), b"q");
    }

    #[test]
    fn test_expand_detects_cycles_and_bounds() {
        let mut entries = VocabularyTable::new().entries().to_vec();
        entries.push(Pair::new(257, 97));
        entries.push(Pair::new(256, 97));
        entries.push(Pair::new(258, 0));
        let table = VocabularyTable::from_entries(entries);

        assert!(matches!(
            table.expand(256),
            Err(TokenizerError::CyclicReference { symbol: 256 })
        ));
        assert!(matches!(
            table.expand(258),
            Err(TokenizerError::CyclicReference { symbol: 258 })
        ));
        assert!(matches!(
            table.expand(999),
            Err(TokenizerError::UnknownSymbol { symbol: 999, len: 259 })
        ));
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut table = VocabularyTable::new();
        table.append_merge(Pair::new(97, 97)).unwrap();
        table.append_merge(Pair::new(256, 98)).unwrap();

        let bytes = table.to_bytes();
        assert_eq!(bytes.len(), table.len() * RECORD_SIZE);
        assert_eq!(&bytes[256 * RECORD_SIZE..256 * RECORD_SIZE + 8], &[97, 0, 0, 0, 97, 0, 0, 0]);
        assert_eq!(VocabularyTable::from_bytes(&bytes).unwrap(), table);
    }

    #[test]
    fn test_from_bytes_rejects_partial_record() {
        let bytes = vec![0u8; RECORD_SIZE * 3 + 5];
        assert!(matches!(
            VocabularyTable::from_bytes(&bytes),
            Err(TokenizerError::Format(_))
        ));
    }

    #[test]
    fn test_from_bytes_does_not_validate() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&7u32.to_le_bytes());
        bytes.extend_from_slice(&9u32.to_le_bytes());

        let table = VocabularyTable::from_bytes(&bytes).unwrap();
        assert_eq!(table.entries(), &[Pair::new(7, 9)]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = temp_path("roundtrip.bin");

        let mut table = VocabularyTable::new();
        table.append_merge(Pair::new(104, 105)).unwrap();
        table.append_merge(Pair::new(256, 33)).unwrap();
        table.serialize(&path).unwrap();

        let loaded = VocabularyTable::deserialize(&path).unwrap();
        assert_eq!(loaded, table);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_roundtrip_leaves_only() {
        let path = temp_path("leaves.bin");

        let table = VocabularyTable::new();
        table.serialize(&path).unwrap();
        assert_eq!(VocabularyTable::deserialize(&path).unwrap(), table);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_deserialize_missing_file() {
        let path = temp_path("does_not_exist.bin");
        assert!(matches!(
            VocabularyTable::deserialize(&path),
            Err(TokenizerError::Io { .. })
        ));
    }
}
