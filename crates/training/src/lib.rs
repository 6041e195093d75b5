//! Mergevocab-training - vocabulary training by iterative pair merging
//!
//! This crate learns a subword vocabulary from a corpus of symbols: each
//! round finds the most frequent adjacent pair, merges it into a new symbol
//! and rewrites the corpus.
//!
//! # Features
//!
//! - Deterministic tie-breaking on the leftmost first occurrence
//! - Optional parallel pair counting with identical results
//! - Early, non-fatal stop when the corpus runs out of pairs
//!
//! # Example
//!
//! ```rust
//! use mergevocab_core::split_symbols;
//! use mergevocab_training::{TrainingConfig, VocabularyBuilder};
//!
//! let config = TrainingConfig {
//!     rounds: 2,
//!     parallel: false,
//! };
//! let outcome = VocabularyBuilder::new(split_symbols("low lower"), config)?.run()?;
//! assert_eq!(outcome.merges.len(), 2);
//! # Ok::<(), mergevocab_training::MergeError>(())
//! ```

pub use mergevocab_core::{MergeError, Result};

pub mod training;
pub use training::{
    train, BuilderState, MergeEngine, PairEntry, PairFrequencyIndex, RoundStats, StopReason,
    TrainingConfig, TrainingOutcome, VocabularyBuilder,
};
