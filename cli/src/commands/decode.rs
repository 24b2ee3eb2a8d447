//! Decode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the binary vocabulary
    #[arg(long)]
    pub vocab: PathBuf,

    /// Token file to decode
    #[arg(short, long)]
    pub tokens: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use pairfold_tokenizer::VocabLoader;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab)?;
    let ids = VocabLoader::load_tokens(&cmd.tokens)
        .with_context(|| format!("Failed to load tokens {}", cmd.tokens.display()))?;

    let bytes = tokenizer.decode(&ids)?;
    log::info!("Decoded {} tokens into {} bytes", ids.len(), bytes.len());

    super::write_output(cmd.output.as_deref(), &bytes)
}
