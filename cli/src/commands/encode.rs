//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the binary vocabulary
    #[arg(long)]
    pub vocab: PathBuf,

    /// Input file to encode ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Token file to write (IDs are printed if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use pairfold_tokenizer::io::save_tokens;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab)?;
    let data = super::read_input(&cmd.input)?;

    let ids = tokenizer.encode(&data);
    log::info!("Encoded {} bytes into {} tokens", data.len(), ids.len());

    match &cmd.output {
        Some(path) => {
            save_tokens(&ids, path)
                .with_context(|| format!("Failed to save tokens {}", path.display()))?;
            println!("Encoded {} tokens to {}", ids.len(), path.display());
        }
        None => {
            let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            println!("{}", ids_str.join(" "));
        }
    }

    Ok(())
}
