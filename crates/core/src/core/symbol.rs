//! Symbols, corpora and adjacent pairs.
//!
//! A symbol starts out as a single character and grows by concatenation each
//! time a pair containing it is merged. Symbols are compared by value.

use compact_str::CompactString;
use std::fmt;

/// An atomic or previously merged string token.
pub type Symbol = CompactString;

/// The ordered sequence of symbols being trained on.
pub type Corpus = Vec<Symbol>;

/// Two symbols observed at adjacent positions `(i, i + 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub first: Symbol,
    pub second: Symbol,
}

impl Pair {
    /// Create a pair from anything string-like.
    pub fn new(first: impl Into<Symbol>, second: impl Into<Symbol>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The symbol produced by merging this pair: `first + second`.
    pub fn merged(&self) -> Symbol {
        let mut merged = CompactString::with_capacity(self.first.len() + self.second.len());
        merged.push_str(&self.first);
        merged.push_str(&self.second);
        merged
    }

    /// Whether both halves are the same symbol (`("a", "a")`).
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }

    /// Whether `left`, `right` form this pair.
    #[inline]
    pub fn matches(&self, left: &str, right: &str) -> bool {
        self.first == left && self.second == right
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.first.as_str(), self.second.as_str())
    }
}

/// Split text into its initial corpus: one symbol per character.
pub fn split_symbols(text: &str) -> Corpus {
    let mut buf = [0u8; 4];
    text.chars()
        .map(|c| CompactString::new(c.encode_utf8(&mut buf)))
        .collect()
}

/// Case-fold a symbol for vocabulary seeding.
#[inline]
pub fn case_fold(symbol: &str) -> Symbol {
    CompactString::new(symbol.to_lowercase())
}

/// Count occurrences of `pair` at adjacent positions in `corpus`,
/// overlapping matches included.
pub fn count_adjacent(corpus: &[Symbol], pair: &Pair) -> usize {
    corpus
        .windows(2)
        .filter(|w| pair.matches(&w[0], &w[1]))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged() {
        let pair = Pair::new("ab", "c");
        assert_eq!(pair.merged(), "abc");
        assert!(!pair.is_self_pair());
        assert!(Pair::new("a", "a").is_self_pair());
    }

    #[test]
    fn test_split_symbols() {
        let corpus = split_symbols("héllo");
        assert_eq!(corpus, vec!["h", "é", "l", "l", "o"]);
        assert!(split_symbols("").is_empty());
    }

    #[test]
    fn test_case_fold() {
        assert_eq!(case_fold("A"), "a");
        assert_eq!(case_fold("Ab"), "ab");
        assert_eq!(case_fold(" "), " ");
    }

    #[test]
    fn test_count_adjacent_overlapping() {
        let corpus = split_symbols("aaab");
        assert_eq!(count_adjacent(&corpus, &Pair::new("a", "a")), 2);
        assert_eq!(count_adjacent(&corpus, &Pair::new("a", "b")), 1);
        assert_eq!(count_adjacent(&corpus, &Pair::new("b", "a")), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new("a", " ").to_string(), "(\"a\", \" \")");
    }
}
