//! Train command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output path for the binary vocabulary
    #[arg(long)]
    pub vocab: PathBuf,

    /// Also save the compressed input as a token file
    #[arg(short, long)]
    pub tokens: Option<PathBuf>,

    /// Also export the merge graph in DOT format
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// JSON training configuration; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum frequency for merges
    #[arg(short, long)]
    pub min_frequency: Option<u64>,

    /// Stop after this many merges
    #[arg(short = 'r', long)]
    pub max_rounds: Option<usize>,

    /// Write the effective configuration as JSON
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use pairfold_tokenizer::io::{
    save_config, save_tokens, VocabLoader, VocabSaver, DEFAULT_GRAPH_NAME,
};
use pairfold_tokenizer::{Tokenizer, TrainingConfig};
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let mut config = match &cmd.config {
        Some(path) => VocabLoader::load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TrainingConfig::default(),
    };
    if let Some(min_frequency) = cmd.min_frequency {
        config.min_frequency = min_frequency;
    }
    if let Some(max_rounds) = cmd.max_rounds {
        config.max_rounds = Some(max_rounds);
    }
    log::info!("Training config: {:?}", config);

    if let Some(path) = &cmd.save_config {
        save_config(&config, path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
    }

    let data = super::read_input(&cmd.input)?;
    let mut tokenizer = Tokenizer::builder().config(config).build()?;

    let start = Instant::now();
    let encoding = tokenizer.train(&data)?;
    let elapsed = start.elapsed();

    tokenizer
        .save(&cmd.vocab)
        .with_context(|| format!("Failed to save vocabulary {}", cmd.vocab.display()))?;

    if let Some(path) = &cmd.tokens {
        save_tokens(&encoding.ids, path)
            .with_context(|| format!("Failed to save tokens {}", path.display()))?;
    }

    if let Some(path) = &cmd.graph {
        VocabSaver::new(tokenizer.vocab())
            .save_graph(path, DEFAULT_GRAPH_NAME)
            .with_context(|| format!("Failed to save graph {}", path.display()))?;
    }

    println!("Trained {} merges in {:.2}s", encoding.rounds(), elapsed.as_secs_f64());
    println!("  Input: {} bytes -> {} tokens", data.len(), encoding.len());
    println!("  Stopped: {}", encoding.halt);
    println!("  Vocabulary: {} entries saved to {}", tokenizer.vocab_size(), cmd.vocab.display());

    Ok(())
}
