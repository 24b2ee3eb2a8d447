//! Graph command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Graph command arguments.
#[derive(Parser)]
pub struct GraphCommand {
    /// Path to the binary vocabulary
    #[arg(long)]
    pub vocab: PathBuf,

    /// Output DOT file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the digraph block
    #[arg(short, long, default_value = pairfold_tokenizer::io::DEFAULT_GRAPH_NAME)]
    pub name: String,
}

use anyhow::Result as AnyhowResult;
use pairfold_core::to_dot;

pub fn run(cmd: GraphCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab)?;

    let edges = tokenizer.export_graph()?;
    log::info!("Exporting {} edges", edges.len());

    super::write_output(cmd.output.as_deref(), to_dot(&edges, &cmd.name).as_bytes())
}
