//! Render command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Render command arguments.
#[derive(Parser)]
pub struct RenderCommand {
    /// Path to the binary vocabulary
    #[arg(long)]
    pub vocab: PathBuf,

    /// Token file to render
    #[arg(short, long)]
    pub tokens: PathBuf,
}

use anyhow::{Context, Result as AnyhowResult};
use pairfold_tokenizer::VocabLoader;

pub fn run(cmd: RenderCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab)?;
    let ids = VocabLoader::load_tokens(&cmd.tokens)
        .with_context(|| format!("Failed to load tokens {}", cmd.tokens.display()))?;

    let mut rendered = tokenizer.render(&ids)?;
    rendered.push(b'\n');

    super::write_output(None, &rendered)
}
