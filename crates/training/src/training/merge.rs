//! Corpus rewriting for a chosen merge.

use mergevocab_core::{Corpus, Pair, Symbol};

/// Rewrites a corpus by replacing occurrences of a pair with its concatenation.
pub struct MergeEngine;

impl MergeEngine {
    /// Replace every non-overlapping occurrence of `pair` in `corpus`,
    /// scanning left to right.
    ///
    /// Returns the new corpus and the number of matches consumed. A run of a
    /// self pair such as `a a a` is matched from the left only: the first two
    /// symbols merge and the third is emitted unchanged.
    pub fn apply(corpus: &[Symbol], pair: &Pair) -> (Corpus, usize) {
        let merged = pair.merged();
        let mut out = Corpus::with_capacity(corpus.len());
        let mut matches = 0;
        let mut i = 0;

        while i < corpus.len() {
            if i + 1 < corpus.len() && pair.matches(&corpus[i], &corpus[i + 1]) {
                out.push(merged.clone());
                matches += 1;
                i += 2;
            } else {
                out.push(corpus[i].clone());
                i += 1;
            }
        }

        debug_assert_eq!(out.len(), corpus.len() - matches);
        (out, matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergevocab_core::{count_adjacent, split_symbols};

    fn symbols(items: &[&str]) -> Corpus {
        items.iter().map(|s| Symbol::new(s)).collect()
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let corpus = split_symbols("ababc");
        let (out, matches) = MergeEngine::apply(&corpus, &Pair::new("a", "b"));

        assert_eq!(out, symbols(&["ab", "ab", "c"]));
        assert_eq!(matches, 2);
    }

    #[test]
    fn test_apply_first_tie_pair() {
        let corpus = split_symbols("xyyx");
        let (out, _) = MergeEngine::apply(&corpus, &Pair::new("x", "y"));
        assert_eq!(out, symbols(&["xy", "y", "x"]));
    }

    #[test]
    fn test_self_pair_odd_run_leaves_trailing_symbol() {
        let corpus = split_symbols("aaa");
        let (out, matches) = MergeEngine::apply(&corpus, &Pair::new("a", "a"));

        assert_eq!(out, symbols(&["aa", "a"]));
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_self_pair_even_run() {
        let corpus = split_symbols("aaaab");
        let (out, matches) = MergeEngine::apply(&corpus, &Pair::new("a", "a"));

        assert_eq!(out, symbols(&["aa", "aa", "b"]));
        assert_eq!(matches, 2);
    }

    #[test]
    fn test_trailing_unmatched_symbol_is_kept() {
        let corpus = split_symbols("abx");
        let (out, _) = MergeEngine::apply(&corpus, &Pair::new("a", "b"));
        assert_eq!(out, symbols(&["ab", "x"]));

        let (out, matches) = MergeEngine::apply(&corpus, &Pair::new("q", "r"));
        assert_eq!(out, corpus);
        assert_eq!(matches, 0);
    }

    #[test]
    fn test_short_corpora() {
        let pair = Pair::new("a", "b");
        assert_eq!(MergeEngine::apply(&[], &pair), (Corpus::new(), 0));

        let single = split_symbols("a");
        assert_eq!(MergeEngine::apply(&single, &pair), (single.clone(), 0));
    }

    #[test]
    fn test_merges_multi_char_symbols() {
        let corpus = symbols(&["th", "e", " ", "th", "e", "n"]);
        let (out, matches) = MergeEngine::apply(&corpus, &Pair::new("th", "e"));

        assert_eq!(out, symbols(&["the", " ", "the", "n"]));
        assert_eq!(matches, 2);
    }

    #[test]
    fn test_no_pattern_left_after_apply() {
        let corpus = split_symbols("abcabcaabbcc ab");
        for pair in [Pair::new("a", "b"), Pair::new("b", "c"), Pair::new("c", " ")] {
            let (out, _) = MergeEngine::apply(&corpus, &pair);
            assert_eq!(count_adjacent(&out, &pair), 0, "pair {pair} survived");
        }
    }

    #[test]
    fn test_self_pair_leftovers_bounded_by_odd_runs() {
        // runs of length 1, 2, 3, 4, 5
        let corpus = split_symbols("a.aa.aaa.aaaa.aaaaa");
        let pair = Pair::new("a", "a");
        let (out, matches) = MergeEngine::apply(&corpus, &pair);

        assert_eq!(matches, 1 + 1 + 2 + 2);
        assert_eq!(count_adjacent(&out, &pair), 0);
        let lone = out.iter().filter(|s| s.as_str() == "a").count();
        // odd runs: 1, 3, 5
        assert_eq!(lone, 3);
    }
}
