//! Vocabulary storage and lookup.
//!
//! The vocabulary is a set of symbols. Each distinct symbol also receives a
//! stable ID in insertion order, which keeps listing and comparison of
//! trained vocabularies deterministic.

use crate::core::symbol::Symbol;
use crate::error::{MergeError, Result};
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: symbol -> ID
pub type Vocab = AHashMap<Symbol, u32>;

/// Reverse mapping: ID -> symbol (the ID is the index)
pub type VocabR = Vec<Symbol>;

/// Vocabulary with forward and reverse mappings.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: symbol -> ID
    vocab: Vocab,
    /// Reverse mapping: ID -> symbol
    vocab_r: VocabR,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vocab: Vocab::with_capacity(capacity),
            vocab_r: VocabR::with_capacity(capacity),
        }
    }

    /// Seed a vocabulary with the distinct case-folded symbols of `corpus`,
    /// in order of first occurrence.
    pub fn from_case_folded(corpus: &[Symbol]) -> Result<Self> {
        // seed size is bounded by the distinct characters
        let mut vocab = Self::with_capacity(corpus.len().min(256));
        for symbol in corpus {
            vocab.add_token(&crate::core::symbol::case_fold(symbol))?;
        }
        Ok(vocab)
    }

    /// Add a token to the vocabulary.
    ///
    /// Returns the ID assigned to the token. Adding a token that is already
    /// present returns its existing ID and leaves the size unchanged.
    pub fn add_token(&mut self, token: &str) -> Result<u32> {
        if let Some(&id) = self.vocab.get(token) {
            return Ok(id);
        }

        let id = u32::try_from(self.vocab_r.len()).map_err(|_| MergeError::VocabularyOverflow {
            max: u32::MAX as usize,
            tried: self.vocab_r.len() + 1,
        })?;

        let token = CompactString::new(token);
        self.vocab_r.push(token.clone());
        self.vocab.insert(token, id);

        Ok(id)
    }

    /// Check whether a token is in the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.vocab.contains_key(token)
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(id as usize).map(|s| s.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab_r.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab_r.is_empty()
    }

    /// Iterate over tokens in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.vocab_r.iter().map(|s| s.as_str())
    }

    /// Tokens sorted lexicographically, independent of insertion order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl PartialEq for Vocabulary {
    /// Vocabularies compare as sets.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for Vocabulary {}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.vocab_r.iter()
    }
}
