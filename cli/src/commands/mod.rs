//! CLI commands for the mergevocab tool.

pub mod benchmark;
pub mod pairs;
pub mod train;

pub use benchmark::BenchmarkCommand;
pub use pairs::PairsCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use std::io::Read;

/// Read training text from a file, or from stdin when `input` is "-".
pub fn read_input(input: &str) -> AnyhowResult<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read text from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

/// Configure the global rayon pool.
pub fn configure_threads(threads: Option<usize>) -> AnyhowResult<()> {
    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("unable to configure Rayon thread pool")?;
    }
    Ok(())
}

/// Render a symbol so whitespace stays visible in terminal output.
pub fn show(symbol: &str) -> String {
    format!("{symbol:?}")
}
