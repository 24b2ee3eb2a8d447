//! Pairs command implementation.

use clap::Parser;

/// Pairs command arguments.
#[derive(Parser)]
pub struct PairsCommand {
    /// Path to the input file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Number of pairs to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,
}

use anyhow::Result as AnyhowResult;
use pairfold_tokenizer::{PairFrequencyCounter, Symbol};
use std::fmt::Write;

pub fn run(cmd: PairsCommand) -> AnyhowResult<()> {
    let data = super::read_input(&cmd.input)?;
    let ids: Vec<Symbol> = data.iter().map(|&b| b as Symbol).collect();

    let freqs = PairFrequencyCounter::count(&ids);
    log::info!("Counted {} distinct pairs over {} bytes", freqs.len(), data.len());

    let mut report = String::new();
    for (pair, count) in freqs.top(cmd.top) {
        writeln!(
            report,
            "{} {} => {}",
            leaf_label(pair.left),
            leaf_label(pair.right),
            count
        )?;
    }

    super::write_output(None, report.as_bytes())
}

/// Quote a byte leaf, escaping anything that is not printable ASCII.
fn leaf_label(symbol: Symbol) -> String {
    match u8::try_from(symbol) {
        Ok(byte) => format!("'{}'", std::ascii::escape_default(byte)),
        Err(_) => format!("[{}]", symbol),
    }
}
