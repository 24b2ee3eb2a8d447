//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: usize,

    /// Stop each run after this many merges
    #[arg(short = 'r', long)]
    pub max_rounds: Option<usize>,
}

use anyhow::{ensure, Result as AnyhowResult};
use pairfold_tokenizer::Tokenizer;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be at least 1");

    let data = super::read_input(&cmd.input)?;
    let mut builder = Tokenizer::builder();
    if let Some(max_rounds) = cmd.max_rounds {
        builder = builder.max_rounds(max_rounds);
    }
    let mut tokenizer = builder.build()?;

    println!("Benchmarking merge loop...");
    println!("  Input length: {} bytes", data.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let encoding = tokenizer.train(&data)?;

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        tokenizer.train(&data)?;
    }
    let elapsed = start.elapsed();

    let avg_time_ms = elapsed.as_secs_f64() * 1000.0 / cmd.iterations as f64;
    let ratio = encoding.len() as f64 / data.len().max(1) as f64;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!("  Merges per run: {}", encoding.rounds());
    println!("  Compressed size: {} tokens ({:.1}% of input)", encoding.len(), ratio * 100.0);

    Ok(())
}
