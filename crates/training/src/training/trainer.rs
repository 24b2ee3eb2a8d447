//! BPE merge loop.
//!
//! Each round counts adjacent pairs in the current sequence, selects the most
//! frequent one, appends it to the vocabulary and rewrites the sequence. The
//! sequence strictly shrinks every round that merges, so an input of length
//! `n` halts after at most `n - 1` rounds.

use super::counter::PairFrequencyCounter;
use super::selector::{HaltReason, MergeSelector, Selection, DEFAULT_MIN_FREQUENCY};
use pairfold_core::{apply_merge, Pair, Result, Symbol, VocabularyTable};
use serde::{Deserialize, Serialize};

/// Configuration for the merge loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Minimum frequency for a pair to be merged
    pub min_frequency: u64,
    /// Stop after this many merges even if pairs still repeat
    pub max_rounds: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_rounds: None,
        }
    }
}

/// One completed merge round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRecord {
    /// Symbol assigned to the merge
    pub symbol: Symbol,
    /// The merged pair
    pub pair: Pair,
    /// Frequency the pair was selected with (overlapping windows included)
    pub count: u64,
    /// Number of rewrites performed on the sequence
    pub occurrences: usize,
}

/// Result of a single [`MergeTrainer::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// A merge was applied; `tokens` replaces the previous sequence.
    Merged {
        record: MergeRecord,
        tokens: Vec<Symbol>,
    },
    /// The selector declined to merge.
    Halted(HaltReason),
}

/// Final state of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// The learned vocabulary (leaves plus one entry per round)
    pub vocab: VocabularyTable,
    /// The compressed input
    pub tokens: Vec<Symbol>,
    /// One record per merge round, in order
    pub history: Vec<MergeRecord>,
    /// Why the loop stopped
    pub halt: HaltReason,
}

impl TrainingOutcome {
    /// Number of merge rounds performed.
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}

/// BPE merge trainer.
#[derive(Debug, Clone)]
pub struct MergeTrainer {
    config: TrainingConfig,
    selector: MergeSelector,
}

impl MergeTrainer {
    /// Create a trainer, rejecting invalid configurations.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        let selector = MergeSelector::new(config.min_frequency)?;
        Ok(Self { config, selector })
    }

    /// Create a trainer that runs until no pair repeats.
    pub fn with_defaults() -> Self {
        Self {
            config: TrainingConfig::default(),
            selector: MergeSelector::default(),
        }
    }

    /// Create a trainer capped at `max_rounds` merges.
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self {
            config: TrainingConfig {
                max_rounds: Some(max_rounds),
                ..Default::default()
            },
            selector: MergeSelector::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run the merge loop over raw bytes, starting from a fresh vocabulary.
    pub fn train(&self, data: &[u8]) -> Result<TrainingOutcome> {
        let tokens = data.iter().map(|&b| b as Symbol).collect();
        self.train_from(VocabularyTable::new(), tokens)
    }

    /// Continue the merge loop from an existing vocabulary and sequence.
    pub fn train_from(
        &self,
        mut vocab: VocabularyTable,
        mut tokens: Vec<Symbol>,
    ) -> Result<TrainingOutcome> {
        log::info!(
            "Starting merge loop: {} symbols, {} existing merges",
            tokens.len(),
            vocab.merge_count()
        );

        let mut history = Vec::new();

        let halt = loop {
            if let Some(max_rounds) = self.config.max_rounds {
                if history.len() >= max_rounds {
                    log::warn!("Stopping after {} rounds (round limit)", max_rounds);
                    break HaltReason::RoundLimit { rounds: max_rounds };
                }
            }

            match self.step(&mut vocab, &tokens)? {
                RoundResult::Merged {
                    record,
                    tokens: next,
                } => {
                    tokens = next;
                    history.push(record);
                }
                RoundResult::Halted(reason) => break reason,
            }
        };

        log::info!(
            "Finished merge loop: {} rounds, {} symbols left ({})",
            history.len(),
            tokens.len(),
            halt
        );

        Ok(TrainingOutcome {
            vocab,
            tokens,
            history,
            halt,
        })
    }

    /// Run a single round: count, select, append and rewrite.
    ///
    /// The vocabulary is only touched when a merge happens.
    pub fn step(&self, vocab: &mut VocabularyTable, tokens: &[Symbol]) -> Result<RoundResult> {
        let freqs = PairFrequencyCounter::count(tokens);

        let candidate = match self.selector.decide(&freqs) {
            Selection::Merge(candidate) => candidate,
            Selection::Halt(reason) => return Ok(RoundResult::Halted(reason)),
        };

        let symbol = vocab.append_merge(candidate.pair)?;
        let next = apply_merge(tokens, candidate.pair, symbol);

        let record = MergeRecord {
            symbol,
            pair: candidate.pair,
            count: candidate.count,
            occurrences: tokens.len() - next.len(),
        };

        log::debug!(
            "Merged {} -> {} (count {}, {} rewrites, {} symbols left)",
            record.pair,
            record.symbol,
            record.count,
            record.occurrences,
            next.len()
        );

        Ok(RoundResult::Merged {
            record,
            tokens: next,
        })
    }
}

impl Default for MergeTrainer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairfold_core::{decode, TokenizerError};

    const A: Symbol = b'a' as Symbol;
    const B: Symbol = b'b' as Symbol;
    const C: Symbol = b'c' as Symbol;
    const D: Symbol = b'd' as Symbol;

    #[test]
    fn test_classic_scenario() {
        let outcome = MergeTrainer::with_defaults().train(b"aaabdaaabac").unwrap();

        // Round 2 is a tie between (256, a) and (a, b); (256, a) occurs first.
        let pairs: Vec<(Symbol, Pair, u64)> = outcome
            .history
            .iter()
            .map(|r| (r.symbol, r.pair, r.count))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (256, Pair::new(A, A), 4),
                (257, Pair::new(256, A), 2),
                (258, Pair::new(257, B), 2),
            ]
        );

        assert_eq!(outcome.tokens, vec![258, D, 258, A, C]);
        assert_eq!(outcome.vocab.len(), 259);
        assert!(matches!(
            outcome.halt,
            HaltReason::BelowThreshold { best } if best.count == 1
        ));
        assert_eq!(decode(&outcome.vocab, &outcome.tokens).unwrap(), b"aaabdaaabac");
    }

    #[test]
    fn test_occurrences_track_shrink() {
        let outcome = MergeTrainer::with_defaults().train(b"aaabdaaabac").unwrap();
        let occurrences: Vec<usize> = outcome.history.iter().map(|r| r.occurrences).collect();
        assert_eq!(occurrences, vec![2, 2, 2]);
    }

    #[test]
    fn test_terminates_within_length_bound() {
        let inputs: [&[u8]; 5] = [
            b"aaaaaaaaaaaaaaaa",
            b"abababababababab",
            b"the quick brown fox jumps over the lazy dog, the end",
            b"xy",
            b"mississippi mississippi mississippi",
        ];

        for input in inputs {
            let outcome = MergeTrainer::with_defaults().train(input).unwrap();
            assert!(outcome.rounds() <= input.len() - 1);

            let mut len = input.len();
            for record in &outcome.history {
                assert!(record.occurrences >= 1);
                len -= record.occurrences;
            }
            assert_eq!(outcome.tokens.len(), len);
            assert_eq!(decode(&outcome.vocab, &outcome.tokens).unwrap(), input);
        }
    }

    #[test]
    fn test_round_limit() {
        let outcome = MergeTrainer::with_max_rounds(1)
            .train(b"aaabdaaabac")
            .unwrap();

        assert_eq!(outcome.rounds(), 1);
        assert_eq!(outcome.halt, HaltReason::RoundLimit { rounds: 1 });
        assert_eq!(outcome.tokens.len(), 9);
    }

    #[test]
    fn test_zero_round_limit() {
        let outcome = MergeTrainer::with_max_rounds(0).train(b"aaaa").unwrap();
        assert_eq!(outcome.rounds(), 0);
        assert_eq!(outcome.vocab, VocabularyTable::new());
        assert_eq!(outcome.tokens, vec![A, A, A, A]);
    }

    #[test]
    fn test_short_inputs() {
        let outcome = MergeTrainer::with_defaults().train(b"").unwrap();
        assert_eq!(outcome.halt, HaltReason::NoPairs);
        assert!(outcome.tokens.is_empty());

        let outcome = MergeTrainer::with_defaults().train(b"z").unwrap();
        assert_eq!(outcome.halt, HaltReason::NoPairs);
        assert_eq!(outcome.rounds(), 0);
    }

    #[test]
    fn test_repeated_pairs_merge_down() {
        let outcome = MergeTrainer::with_defaults().train(b"aaaaaaaa").unwrap();

        // 8 x a -> 4 x 256 -> 2 x 257, then (257, 257) occurs once.
        assert_eq!(outcome.tokens, vec![257, 257]);
        assert_eq!(outcome.vocab.get(256), Some(Pair::new(A, A)));
        assert_eq!(outcome.vocab.get(257), Some(Pair::new(256, 256)));
        assert!(matches!(outcome.halt, HaltReason::BelowThreshold { .. }));
    }

    #[test]
    fn test_step_leaves_vocab_untouched_on_halt() {
        let trainer = MergeTrainer::with_defaults();
        let mut vocab = VocabularyTable::new();

        let result = trainer.step(&mut vocab, &[A, B, C]).unwrap();
        assert!(matches!(result, RoundResult::Halted(_)));
        assert_eq!(vocab.merge_count(), 0);
    }

    #[test]
    fn test_train_from_existing_state() {
        let trainer = MergeTrainer::with_max_rounds(1);
        let first = trainer.train(b"abababcdcd").unwrap();
        assert_eq!(first.vocab.get(256), Some(Pair::new(A, B)));

        let second = MergeTrainer::with_defaults()
            .train_from(first.vocab, first.tokens)
            .unwrap();
        assert_eq!(second.history[0].symbol, 257);
        assert_eq!(decode(&second.vocab, &second.tokens).unwrap(), b"abababcdcd");
    }

    #[test]
    fn test_invalid_config() {
        let result = MergeTrainer::new(TrainingConfig {
            min_frequency: 1,
            max_rounds: None,
        });
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_json() {
        let config: TrainingConfig = serde_json::from_str(r#"{"max_rounds": 3}"#).unwrap();
        assert_eq!(config.max_rounds, Some(3));
        assert_eq!(config.min_frequency, DEFAULT_MIN_FREQUENCY);
    }
}
