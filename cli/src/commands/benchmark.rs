//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Number of merge rounds per run
    #[arg(short = 'k', long, default_value_t = 100)]
    pub rounds: i64,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 5)]
    pub iterations: usize,

    /// Worker threads for parallel counting
    #[arg(short, long)]
    pub threads: Option<usize>,
}

use super::{configure_threads, read_input};
use anyhow::{ensure, Result as AnyhowResult};
use mergevocab_core::{split_symbols, Corpus, MergeRecord};
use mergevocab_training::{TrainingConfig, VocabularyBuilder};
use std::time::{Duration, Instant};

/// Mean duration of one run; zero iterations count as one.
fn per_run(elapsed: Duration, iterations: usize) -> Duration {
    Duration::from_secs_f64(elapsed.as_secs_f64() / iterations.max(1) as f64)
}

fn time_training(
    corpus: &Corpus,
    config: &TrainingConfig,
    iterations: usize,
) -> AnyhowResult<(Duration, MergeRecord)> {
    // Warmup
    let merges = VocabularyBuilder::new(corpus.clone(), config.clone())?.run()?.merges;

    let start = Instant::now();
    for _ in 0..iterations {
        VocabularyBuilder::new(corpus.clone(), config.clone())?.run()?;
    }
    Ok((per_run(start.elapsed(), iterations), merges))
}

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    configure_threads(cmd.threads)?;

    let text = read_input(&cmd.input)?;
    let corpus = split_symbols(&text);

    println!("Benchmarking training...");
    println!("  Text length: {} symbols", corpus.len());
    println!("  Rounds: {}", cmd.rounds);
    println!("  Iterations: {}", cmd.iterations);
    println!();

    let sequential = TrainingConfig {
        rounds: cmd.rounds,
        parallel: false,
    };
    let parallel = TrainingConfig {
        rounds: cmd.rounds,
        parallel: true,
    };

    let (seq_time, seq_merges) = time_training(&corpus, &sequential, cmd.iterations)?;
    let (par_time, par_merges) = time_training(&corpus, &parallel, cmd.iterations)?;

    ensure!(
        seq_merges == par_merges,
        "parallel training diverged from sequential training"
    );

    let rounds_done = seq_merges.len().max(1) as f64;
    println!("Results:");
    println!(
        "  Sequential: {:.3}ms per run ({:.1}us per round)",
        seq_time.as_secs_f64() * 1e3,
        seq_time.as_secs_f64() * 1e6 / rounds_done
    );
    println!(
        "  Parallel:   {:.3}ms per run ({:.1}us per round)",
        par_time.as_secs_f64() * 1e3,
        par_time.as_secs_f64() * 1e6 / rounds_done
    );
    println!(
        "  Speedup:    {:.2}x",
        seq_time.as_secs_f64() / par_time.as_secs_f64().max(f64::EPSILON)
    );
    println!("  Merges learned: {}", seq_merges.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_run_divides_elapsed() {
        assert_eq!(per_run(Duration::from_secs(4), 4), Duration::from_secs(1));
        assert_eq!(per_run(Duration::from_secs(4), 0), Duration::from_secs(4));
    }

    #[test]
    fn test_per_run_beyond_u32_iterations() {
        let iterations = u32::MAX as usize + 2;
        let elapsed = Duration::from_secs(1 << 33);
        let mean = per_run(elapsed, iterations).as_secs_f64();
        assert!((mean - 2.0).abs() < 1e-6);
    }
}
