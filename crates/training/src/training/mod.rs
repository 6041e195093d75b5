//! Training infrastructure for pair-merge vocabularies.
//!
//! This module provides pair counting, corpus rewriting and the round loop
//! that ties them together.

pub mod counter;
pub mod merge;
pub mod trainer;

pub use counter::{PairEntry, PairFrequencyIndex};
pub use merge::MergeEngine;
pub use trainer::{
    train, BuilderState, RoundStats, StopReason, TrainingConfig, TrainingOutcome,
    VocabularyBuilder,
};
