//! Merge record management.
//!
//! The merge record is the ordered list of pairs chosen during training. The
//! order is the priority a downstream segmenter would replay them in, so it is
//! kept exactly as chosen; a rank map gives constant-time lookups.

use crate::core::symbol::{Pair, Symbol};
use ahash::AHashMap;

/// Rank lookup: pair -> position of its first selection.
pub type MergeMap = AHashMap<Pair, usize>;

/// Ordered collection of chosen merges with rank lookup.
#[derive(Debug, Clone, Default)]
pub struct MergeRecord {
    /// Pairs in the order they were chosen
    pairs: Vec<Pair>,
    /// Pair -> rank (lower rank = chosen earlier)
    ranks: MergeMap,
}

impl MergeRecord {
    /// Create a new empty merge record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new record with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            ranks: MergeMap::with_capacity(capacity),
        }
    }

    /// Append a chosen pair. Returns its rank.
    pub fn push(&mut self, pair: Pair) -> usize {
        let rank = self.pairs.len();
        self.ranks.entry(pair.clone()).or_insert(rank);
        self.pairs.push(pair);
        rank
    }

    /// Rank of the first selection of `pair`, if it was ever chosen.
    #[inline]
    pub fn rank_of(&self, pair: &Pair) -> Option<usize> {
        self.ranks.get(pair).copied()
    }

    /// Number of merges recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The chosen pairs, in order.
    #[inline]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// The symbols produced by each merge, in order.
    pub fn merged_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pairs.iter().map(Pair::merged)
    }
}

impl PartialEq for MergeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for MergeRecord {}

impl FromIterator<Pair> for MergeRecord {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        let mut record = Self::new();
        for pair in iter {
            record.push(pair);
        }
        record
    }
}

impl<'a> IntoIterator for &'a MergeRecord {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_ranks_in_order() {
        let mut record = MergeRecord::new();
        assert_eq!(record.push(Pair::new("a", "b")), 0);
        assert_eq!(record.push(Pair::new("ab", "c")), 1);

        assert_eq!(record.rank_of(&Pair::new("a", "b")), Some(0));
        assert_eq!(record.rank_of(&Pair::new("ab", "c")), Some(1));
        assert_eq!(record.rank_of(&Pair::new("c", "d")), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_ranks_follow_collected_order() {
        let record: MergeRecord = vec![Pair::new("a", "b"), Pair::new("b", "c")]
            .into_iter()
            .collect();

        assert_eq!(record.rank_of(&Pair::new("a", "b")), Some(0));
        assert_eq!(record.rank_of(&Pair::new("b", "c")), Some(1));
        assert_eq!(record.rank_of(&Pair::new("x", "y")), None);
    }

    #[test]
    fn test_rank_is_position_in_record() {
        let mut record = MergeRecord::new();
        for i in 0..300usize {
            let rank = record.push(Pair::new(i.to_string(), "x"));
            assert_eq!(rank, i);
            assert_eq!(record.rank_of(&Pair::new(i.to_string(), "x")), Some(i));
        }
        assert_eq!(record.len(), 300);
    }

    #[test]
    fn test_repeated_pair_keeps_first_rank() {
        let mut record = MergeRecord::new();
        record.push(Pair::new("a", "a"));
        record.push(Pair::new("b", "b"));
        record.push(Pair::new("a", "a"));

        assert_eq!(record.len(), 3);
        assert_eq!(record.rank_of(&Pair::new("a", "a")), Some(0));
    }

    #[test]
    fn test_merged_symbols() {
        let record: MergeRecord = vec![Pair::new("a", "b"), Pair::new("ab", "ab")]
            .into_iter()
            .collect();

        let merged: Vec<Symbol> = record.merged_symbols().collect();
        assert_eq!(merged, vec!["ab", "abab"]);
    }
}
