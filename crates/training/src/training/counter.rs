//! Pair frequency counting for vocabulary training.
//!
//! The index is rebuilt from a corpus snapshot every round. Entries are kept
//! in first-seen order next to a hash lookup, so selecting the most frequent
//! pair breaks ties by earliest first occurrence no matter how the hash map
//! iterates.

use ahash::AHashMap;
use mergevocab_core::{MergeError, Pair, Result, Symbol};
use rayon::prelude::*;

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEntry {
    pub pair: Pair,
    pub count: u64,
    /// Position `i` of the leftmost window `(i, i + 1)` holding this pair
    pub first_seen: usize,
}

/// Frequency table of adjacent pairs in one corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct PairFrequencyIndex {
    /// Entries in ascending `first_seen` order
    entries: Vec<PairEntry>,
    /// Pair -> slot in `entries`
    slots: AHashMap<Pair, usize>,
    /// Length of the scanned corpus
    corpus_len: usize,
}

impl PairFrequencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every adjacent pair in `corpus` with a single scan.
    ///
    /// A corpus shorter than two symbols yields an empty index.
    pub fn build(corpus: &[Symbol]) -> Self {
        let mut index = Self::new();
        for (position, window) in corpus.windows(2).enumerate() {
            index.observe(&window[0], &window[1], position, 1);
        }
        index.corpus_len = corpus.len();
        index
    }

    /// Count pairs in parallel.
    ///
    /// Partial tables are merged keeping the lowest position as each pair's
    /// first-seen marker and then re-sorted, so the result is identical to
    /// [`PairFrequencyIndex::build`].
    pub fn build_parallel(corpus: &[Symbol]) -> Self {
        let mut index = corpus
            .par_windows(2)
            .enumerate()
            .fold(Self::new, |mut acc, (position, window)| {
                acc.observe(&window[0], &window[1], position, 1);
                acc
            })
            .reduce(Self::new, Self::absorb);

        index.restore_order();
        index.corpus_len = corpus.len();
        index
    }

    /// Record `count` occurrences of `(first, second)` seen at `position`.
    fn observe(&mut self, first: &Symbol, second: &Symbol, position: usize, count: u64) {
        let pair = Pair {
            first: first.clone(),
            second: second.clone(),
        };
        match self.slots.get(&pair) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.count += count;
                entry.first_seen = entry.first_seen.min(position);
            }
            None => {
                self.slots.insert(pair.clone(), self.entries.len());
                self.entries.push(PairEntry {
                    pair,
                    count,
                    first_seen: position,
                });
            }
        }
    }

    /// Merge another partial table into this one.
    fn absorb(mut self, other: Self) -> Self {
        if self.entries.is_empty() {
            return other;
        }
        for entry in other.entries {
            self.observe(&entry.pair.first, &entry.pair.second, entry.first_seen, entry.count);
        }
        self
    }

    /// Re-sort entries by first-seen position and rebuild slot lookups.
    fn restore_order(&mut self) {
        self.entries.sort_unstable_by_key(|entry| entry.first_seen);
        for (slot, entry) in self.entries.iter().enumerate() {
            if let Some(s) = self.slots.get_mut(&entry.pair) {
                *s = slot;
            }
        }
    }

    /// The pair with the strictly highest count.
    ///
    /// Ties go to the pair whose first adjacent occurrence is leftmost.
    /// Fails with [`MergeError::InsufficientCorpus`] when the index is empty.
    pub fn select_max(&self) -> Result<&PairEntry> {
        let mut best: Option<&PairEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.count <= current.count => {}
                _ => best = Some(entry),
            }
        }
        best.ok_or(MergeError::InsufficientCorpus {
            len: self.corpus_len,
        })
    }

    /// Count for `pair`, or 0 if it was never seen.
    pub fn count(&self, pair: &Pair) -> u64 {
        self.slots
            .get(pair)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// First-seen position of `pair`.
    pub fn first_seen(&self, pair: &Pair) -> Option<usize> {
        self.slots.get(pair).map(|&slot| self.entries[slot].first_seen)
    }

    /// Number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, PairEntry> {
        self.entries.iter()
    }

    /// Up to `n` entries ordered by count descending, then first-seen ascending.
    ///
    /// The first entry, when present, is the one [`select_max`] picks.
    ///
    /// [`select_max`]: PairFrequencyIndex::select_max
    pub fn top(&self, n: usize) -> Vec<&PairEntry> {
        let mut ranked: Vec<&PairEntry> = self.entries.iter().collect();
        // stable sort keeps first-seen order within equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    /// Length of the corpus this index was built from.
    #[inline]
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Total number of adjacent positions counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
