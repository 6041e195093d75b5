//! Mergevocab-core - Data model for pair-merge vocabulary training
//!
//! This crate provides the fundamental data structures for learning a subword
//! vocabulary by iterative pair merging, independent of how the training loop
//! is driven.
//!
//! # Features
//!
//! - Compact symbol storage using `CompactString`
//! - Insertion-ordered vocabulary set backed by `AHashMap`
//! - Ordered merge record with rank lookups
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use mergevocab_core::{split_symbols, Vocabulary};
//!
//! let corpus = split_symbols("Hello");
//! let vocab = Vocabulary::from_case_folded(&corpus)?;
//! assert_eq!(vocab.len(), 4);
//! assert!(vocab.contains("h"));
//! # Ok::<(), mergevocab_core::MergeError>(())
//! ```

pub mod error;
pub use error::{MergeError, Result};

pub mod core;
pub use self::core::{
    case_fold, count_adjacent, split_symbols, Corpus, MergeMap, MergeRecord, Pair, Symbol, Vocab,
    VocabR, Vocabulary,
};
