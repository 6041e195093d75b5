//! Core data model for pair-merge vocabulary training.
//!
//! This module contains the symbol, vocabulary and merge record types shared
//! by the training crate and its callers.

pub mod merges;
pub mod symbol;
pub mod vocab;

pub use merges::{MergeMap, MergeRecord};
pub use symbol::{case_fold, count_adjacent, split_symbols, Corpus, Pair, Symbol};
pub use vocab::{Vocab, VocabR, Vocabulary};
