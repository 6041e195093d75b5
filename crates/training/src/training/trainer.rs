//! Vocabulary builder: the training loop.
//!
//! Each round counts adjacent pairs in the working corpus, picks the most
//! frequent one, adds its concatenation to the vocabulary and rewrites the
//! corpus. Training stops after the requested number of rounds, or earlier
//! once fewer than two symbols remain.

use super::counter::PairFrequencyIndex;
use super::merge::MergeEngine;
use mergevocab_core::{Corpus, MergeError, MergeRecord, Pair, Result, Symbol, Vocabulary};

/// Configuration for vocabulary training.
#[derive(Debug, Clone, Default)]
pub struct TrainingConfig {
    /// Number of merge rounds requested (must be >= 0)
    pub rounds: i64,
    /// Count pairs with rayon each round
    pub parallel: bool,
}

impl TrainingConfig {
    /// Sequential configuration running `rounds` merge rounds.
    pub fn with_rounds(rounds: i64) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    /// Validated round count.
    pub fn round_count(&self) -> Result<usize> {
        usize::try_from(self.rounds).map_err(|_| MergeError::InvalidRoundCount(self.rounds))
    }
}

/// Where the builder is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Vocabulary seeded, no round run yet
    Initialized,
    /// `completed` rounds have finished
    Training { completed: usize },
    /// No more rounds will run
    Completed(StopReason),
}

/// Why training finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All requested rounds ran
    Finished,
    /// Round `round` found fewer than two symbols and training stopped early
    Exhausted { round: usize },
}

/// Trace of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStats {
    /// 1-based round number
    pub round: usize,
    pub pair: Pair,
    /// Frequency of `pair` in the corpus the round started from
    pub count: u64,
    /// Corpus length after the rewrite
    pub corpus_len: usize,
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub vocabulary: Vocabulary,
    pub merges: MergeRecord,
    pub rounds: Vec<RoundStats>,
    pub corpus: Corpus,
    pub stop: StopReason,
}

impl TrainingOutcome {
    /// Whether training stopped before running every requested round.
    pub fn is_partial(&self) -> bool {
        matches!(self.stop, StopReason::Exhausted { .. })
    }
}

/// Learns a vocabulary from a corpus by iterative pair merging.
pub struct VocabularyBuilder {
    /// Configuration
    config: TrainingConfig,
    /// Validated number of rounds
    target: usize,
    /// Corpus in original case, rewritten once per round
    corpus: Corpus,
    /// Vocabulary being built
    vocab: Vocabulary,
    /// Chosen pairs, in order
    merges: MergeRecord,
    rounds: Vec<RoundStats>,
    state: BuilderState,
}

impl VocabularyBuilder {
    /// Seed the vocabulary from `corpus` and prepare to train.
    ///
    /// The vocabulary starts as the distinct case-folded symbols of the
    /// corpus, while the working corpus keeps its original case. Fails with
    /// [`MergeError::InvalidRoundCount`] before doing anything else if the
    /// configured round count is negative.
    pub fn new(corpus: Corpus, config: TrainingConfig) -> Result<Self> {
        let target = config.round_count()?;
        let vocab = Vocabulary::from_case_folded(&corpus)?;

        Ok(Self {
            config,
            target,
            corpus,
            vocab,
            merges: MergeRecord::with_capacity(target.min(1 << 16)),
            rounds: Vec::new(),
            state: BuilderState::Initialized,
        })
    }

    /// Builder running `rounds` sequential rounds.
    pub fn with_rounds(corpus: Corpus, rounds: i64) -> Result<Self> {
        Self::new(corpus, TrainingConfig::with_rounds(rounds))
    }

    #[inline]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Number of rounds completed so far.
    #[inline]
    pub fn completed_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// The working corpus.
    #[inline]
    pub fn corpus(&self) -> &[Symbol] {
        &self.corpus
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    #[inline]
    pub fn merges(&self) -> &MergeRecord {
        &self.merges
    }

    /// Run one merge round.
    ///
    /// Either the whole round happens (pair selected, vocabulary updated,
    /// corpus rewritten) or nothing changes. Returns
    /// [`MergeError::InsufficientCorpus`] when fewer than two symbols remain
    /// and [`MergeError::TrainingCompleted`] once the builder has finished.
    pub fn step(&mut self) -> Result<&RoundStats> {
        if let BuilderState::Completed(_) = self.state {
            return Err(MergeError::TrainingCompleted);
        }

        let index = if self.config.parallel {
            PairFrequencyIndex::build_parallel(&self.corpus)
        } else {
            PairFrequencyIndex::build(&self.corpus)
        };

        let best = index.select_max()?;
        let pair = best.pair.clone();
        let count = best.count;

        self.vocab.add_token(&pair.merged())?;
        let (corpus, matches) = MergeEngine::apply(&self.corpus, &pair);
        debug_assert!(matches > 0);
        self.corpus = corpus;
        self.merges.push(pair.clone());

        let round = self.rounds.len() + 1;
        log::debug!(
            "round {}: merged {} (count {}, {} distinct pairs), corpus now {} symbols",
            round,
            pair,
            count,
            index.len(),
            self.corpus.len()
        );

        self.rounds.push(RoundStats {
            round,
            pair,
            count,
            corpus_len: self.corpus.len(),
        });
        self.state = BuilderState::Training { completed: round };

        Ok(&self.rounds[round - 1])
    }

    /// Run rounds until the requested count is reached or the corpus is
    /// exhausted, and report why training stopped.
    ///
    /// Running out of pairs is not an error: the builder moves to
    /// [`BuilderState::Completed`] keeping everything accumulated so far.
    pub fn run_rounds(&mut self) -> Result<StopReason> {
        if let BuilderState::Completed(stop) = self.state {
            return Ok(stop);
        }

        log::info!(
            "training: {} rounds over {} symbols ({} seed tokens, parallel={})",
            self.target,
            self.corpus.len(),
            self.vocab.len(),
            self.config.parallel
        );

        let mut stop = StopReason::Finished;
        while self.rounds.len() < self.target {
            match self.step().map(|_| ()) {
                Ok(()) => {}
                Err(MergeError::InsufficientCorpus { len }) => {
                    let round = self.rounds.len() + 1;
                    log::info!(
                        "training: stopped at round {} of {}, {} symbol(s) left",
                        round,
                        self.target,
                        len
                    );
                    stop = StopReason::Exhausted { round };
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        self.state = BuilderState::Completed(stop);

        log::info!(
            "training: done, {} merges, vocabulary size {}",
            self.merges.len(),
            self.vocab.len()
        );
        Ok(stop)
    }

    /// Run all remaining rounds and return the result.
    pub fn run(mut self) -> Result<TrainingOutcome> {
        let stop = self.run_rounds()?;

        Ok(TrainingOutcome {
            vocabulary: self.vocab,
            merges: self.merges,
            rounds: self.rounds,
            corpus: self.corpus,
            stop,
        })
    }
}

/// Train on `corpus` for `k` rounds and return the vocabulary and merge record.
///
/// ```rust
/// use mergevocab_core::{split_symbols, Pair};
/// use mergevocab_training::train;
///
/// let (vocab, merges) = train(split_symbols("ababc"), 1)?;
/// assert!(vocab.contains("ab"));
/// assert_eq!(merges.pairs(), &[Pair::new("a", "b")]);
/// # Ok::<(), mergevocab_core::MergeError>(())
/// ```
pub fn train(corpus: Corpus, k: i64) -> Result<(Vocabulary, MergeRecord)> {
    let outcome = VocabularyBuilder::with_rounds(corpus, k)?.run()?;
    Ok((outcome.vocabulary, outcome.merges))
}
