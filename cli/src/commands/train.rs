//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training text ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Number of merge rounds
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub rounds: i64,

    /// Count pairs in parallel each round
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Worker threads for parallel counting
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Print vocabulary tokens sorted instead of in insertion order
    #[arg(long, default_value_t = false)]
    pub sorted: bool,
}

use super::{configure_threads, read_input, show};
use anyhow::Result as AnyhowResult;
use mergevocab_core::split_symbols;
use mergevocab_training::{StopReason, TrainingConfig, VocabularyBuilder};
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    configure_threads(cmd.threads)?;

    let start = Instant::now();
    let text = read_input(&cmd.input)?;
    let corpus = split_symbols(&text);
    log::info!(
        "read {} bytes ({} symbols) in {:.2}s",
        text.len(),
        corpus.len(),
        start.elapsed().as_secs_f64()
    );

    let config = TrainingConfig {
        rounds: cmd.rounds,
        parallel: cmd.parallel,
    };

    let start = Instant::now();
    let outcome = VocabularyBuilder::new(corpus, config)?.run()?;
    log::info!("training completed in {:.2}s", start.elapsed().as_secs_f64());

    if let StopReason::Exhausted { round } = outcome.stop {
        log::warn!(
            "corpus ran out of pairs at round {} of {}; returning partial vocabulary",
            round,
            cmd.rounds
        );
    }

    println!("Merges ({}):", outcome.merges.len());
    for stats in &outcome.rounds {
        println!(
            "  {:>4}  {} + {} -> {}  (count {})",
            stats.round,
            show(&stats.pair.first),
            show(&stats.pair.second),
            show(&stats.pair.merged()),
            stats.count
        );
    }
    println!();

    println!("Vocabulary ({}):", outcome.vocabulary.len());
    let tokens: Vec<&str> = if cmd.sorted {
        outcome.vocabulary.sorted()
    } else {
        outcome.vocabulary.iter().collect()
    };
    for token in tokens {
        println!("  {}", show(token));
    }

    Ok(())
}
