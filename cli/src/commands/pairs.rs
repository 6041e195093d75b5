//! Pairs command implementation.

use clap::Parser;

/// Pairs command arguments.
#[derive(Parser)]
pub struct PairsCommand {
    /// Path to the text ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Number of pairs to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub top: usize,
}

use super::{read_input, show};
use anyhow::Result as AnyhowResult;
use mergevocab_core::split_symbols;
use mergevocab_training::PairFrequencyIndex;

pub fn run(cmd: PairsCommand) -> AnyhowResult<()> {
    let text = read_input(&cmd.input)?;
    let corpus = split_symbols(&text);
    let index = PairFrequencyIndex::build(&corpus);

    println!(
        "{} symbols, {} adjacent positions, {} distinct pairs",
        index.corpus_len(),
        index.total(),
        index.len()
    );
    println!("{:>8}  {:>10}  pair", "count", "first_seen");
    for entry in index.top(cmd.top) {
        println!(
            "{:>8}  {:>10}  {} {}",
            entry.count,
            entry.first_seen,
            show(&entry.pair.first),
            show(&entry.pair.second)
        );
    }

    Ok(())
}
