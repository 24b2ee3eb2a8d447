//! Pairfold CLI - Command-line interface for the byte-pair tokenizer.
//!
//! This is the main entry point for the `pairfold` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    BenchmarkCommand, DecodeCommand, EncodeCommand, GraphCommand, PairsCommand, RenderCommand,
    TrainCommand,
};

#[derive(Parser)]
#[command(name = "pairfold")]
#[command(about = "Byte-pair encoding compressor and tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn merges from a file and save the vocabulary
    Train(TrainCommand),
    /// Compress input with a saved vocabulary
    Encode(EncodeCommand),
    /// Expand a token file back to its original bytes
    Decode(DecodeCommand),
    /// Show a token file one level deep
    Render(RenderCommand),
    /// Export the merge graph in DOT format
    Graph(GraphCommand),
    /// Show the most frequent adjacent byte pairs
    Pairs(PairsCommand),
    /// Benchmark the merge loop
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Render(cmd) => commands::render::run(cmd)?,
        Commands::Graph(cmd) => commands::graph::run(cmd)?,
        Commands::Pairs(cmd) => commands::pairs::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
