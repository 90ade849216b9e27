//! Permutation generation
//!
//! Enumerates every arrangement of a character sequence using Heap's
//! algorithm. A sequence of length n yields exactly n! arrangements, counted
//! with multiplicity: repeated letters are not collapsed here, so `"aab"`
//! produces `"aab"` twice among its six results. Deduplication belongs to
//! the pipeline.
//!
//! Cost is factorial in the input length. Ten letters already means
//! 3,628,800 arrangements; callers bound input size themselves.

/// Lazy iterator over all arrangements of a character sequence.
///
/// The working buffer is mutated in place by a single swap between
/// consecutive arrangements. Every item handed out is an independent copy
/// of that buffer, so results never alias each other.
///
/// Arrangements come out in the order of the recursive formulation: to
/// permute the first `k` positions, permute the first `k - 1` positions `k`
/// times, and after each pass swap position `k - 1` with position `i` (the
/// pass index) when `k` is odd, or with position 0 when `k` is even.
#[derive(Debug, Clone)]
pub struct Permutations {
    buffer: Vec<char>,
    /// Pass index for each recursion level `k` (slots 0 and 1 unused)
    counters: Vec<usize>,
    started: bool,
    finished: bool,
    remaining: Option<usize>,
}

impl Permutations {
    pub fn new(letters: Vec<char>) -> Self {
        let n = letters.len();
        let remaining = factorial(n).and_then(|f| usize::try_from(f).ok());

        Self {
            buffer: letters,
            counters: vec![0; n + 1],
            started: false,
            finished: false,
            remaining,
        }
    }

    #[inline]
    fn swap_after_pass(&mut self, k: usize) {
        let pass = self.counters[k];
        if k % 2 == 1 {
            self.buffer.swap(pass, k - 1);
        } else {
            self.buffer.swap(0, k - 1);
        }
    }

    fn emit(&mut self) -> Option<Vec<char>> {
        if let Some(ref mut remaining) = self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Some(self.buffer.clone())
    }
}

impl Iterator for Permutations {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // The first arrangement is the input itself: descending from the top
        // level to level 1 performs no swaps.
        if !self.started {
            self.started = true;
            return self.emit();
        }

        let n = self.buffer.len();
        let mut k = 2;
        loop {
            if k > n {
                self.finished = true;
                return None;
            }

            self.swap_after_pass(k);
            self.counters[k] += 1;

            if self.counters[k] < k {
                // Descend again: every lower level restarts its passes.
                for counter in &mut self.counters[2..k] {
                    *counter = 0;
                }
                return self.emit();
            }

            k += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// Permutations of the characters of `word`
pub fn permutations(word: &str) -> Permutations {
    Permutations::new(word.chars().collect())
}

/// `n!`, or `None` if it does not fit in a `u128`
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn strings(word: &str) -> Vec<String> {
        permutations(word).map(|p| p.into_iter().collect()).collect()
    }

    #[test]
    fn test_empty_input_yields_single_empty_arrangement() {
        let all: Vec<Vec<char>> = Permutations::new(Vec::new()).collect();
        assert_eq!(all, vec![Vec::<char>::new()]);
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(strings("a"), vec!["a"]);
    }

    #[test]
    fn test_two_letters() {
        assert_eq!(strings("ab"), vec!["ab", "ba"]);
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(
            strings("abc"),
            vec!["abc", "bac", "cba", "bca", "cab", "acb"]
        );
    }

    #[test]
    fn test_counts_are_factorial() {
        let letters = "abcdefg";
        for n in 0..=letters.len() {
            let word = &letters[..n];
            let all = strings(word);
            assert_eq!(all.len() as u128, factorial(n).unwrap(), "length {}", n);
        }
    }

    #[test]
    fn test_distinct_letters_give_distinct_arrangements() {
        let all = strings("abcdef");
        let mut unique = all.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), all.len());
        assert_eq!(unique.len(), 720);
    }

    #[test]
    fn test_every_arrangement_is_a_rearrangement() {
        let mut expected: Vec<char> = "permute".chars().collect();
        expected.sort_unstable();

        for mut arrangement in permutations("permute") {
            arrangement.sort_unstable();
            assert_eq!(arrangement, expected);
        }
    }

    #[test]
    fn test_repeated_letters_are_not_collapsed() {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in strings("aab") {
            *counts.entry(word).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["aab"], 2);
        assert_eq!(counts["aba"], 2);
        assert_eq!(counts["baa"], 2);
    }

    #[test]
    fn test_results_do_not_alias() {
        let mut iter = permutations("xy");
        let first = iter.next().unwrap();
        let second = iter.next().unwrap();

        assert_eq!(first, vec!['x', 'y']);
        assert_eq!(second, vec!['y', 'x']);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut iter = permutations("abcd");
        assert_eq!(iter.size_hint(), (24, Some(24)));
        iter.next();
        assert_eq!(iter.size_hint(), (23, Some(23)));
        assert_eq!(iter.by_ref().count(), 23);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut all = strings("äö");
        all.sort();
        assert_eq!(all, vec!["äö", "öä"]);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(40), None);
    }
}
