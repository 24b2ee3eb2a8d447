//! CLI commands for the pairfold tokenizer.

pub mod benchmark;
pub mod decode;
pub mod encode;
pub mod graph;
pub mod pairs;
pub mod render;
pub mod train;

pub use benchmark::BenchmarkCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use graph::GraphCommand;
pub use pairs::PairsCommand;
pub use render::RenderCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use pairfold_tokenizer::Tokenizer;
use std::io::{Read, Write};
use std::path::Path;

/// Read an input file, or stdin when `input` is "-".
pub(crate) fn read_input(input: &str) -> AnyhowResult<Vec<u8>> {
    if input == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read(input).with_context(|| format!("Failed to read input file {}", input))
    }
}

/// Write bytes to a file, or stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, bytes: &[u8]) -> AnyhowResult<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Load a vocabulary file into a tokenizer, checking its invariants.
pub(crate) fn load_tokenizer(vocab: &Path) -> AnyhowResult<Tokenizer> {
    Tokenizer::load(vocab).with_context(|| format!("Failed to load vocabulary {}", vocab.display()))
}
