//! Error types for vocabulary training.

use thiserror::Error;

/// Main error type for the mergevocab libraries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// A negative number of merge rounds was requested
    #[error("Invalid round count: {0} (must be >= 0)")]
    InvalidRoundCount(i64),

    /// A merge round was requested but fewer than two symbols remain
    #[error("Insufficient corpus: {len} symbol(s) left, at least 2 needed to form a pair")]
    InsufficientCorpus { len: usize },

    /// A round was requested after training finished
    #[error("Training already completed")]
    TrainingCompleted,

    /// Vocabulary overflow
    #[error("Vocabulary size exceeded maximum of {max} (tried to add {tried})")]
    VocabularyOverflow { max: usize, tried: usize },
}

/// Result type alias for mergevocab operations.
pub type Result<T> = std::result::Result<T, MergeError>;
