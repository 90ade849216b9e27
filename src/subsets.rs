//! Subset enumeration
//!
//! In subset mode every non-empty selection of the input letters is permuted
//! separately, so `"cat"` also yields candidates like `"at"` and `"t"`. An
//! n-letter input has 2^n - 1 such selections. Selections are positional:
//! the two `a`s in `"aa"` are distinct positions, so `"aa"` produces the
//! selections `a`, `a` and `aa`.

/// Iterator over all non-empty index subsets of `0..n`.
///
/// Subsets come out by size ascending, and within one size in
/// lexicographic index order: `[0] [1] [2] [0,1] [0,2] [1,2] [0,1,2]`.
#[derive(Debug, Clone)]
pub struct IndexSubsets {
    n: usize,
    current: Vec<usize>,
    finished: bool,
}

impl IndexSubsets {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            current: Vec::new(),
            finished: n == 0,
        }
    }

    /// Advance `current` to the next combination of the same size.
    /// Returns false once the last combination of that size has been seen.
    fn advance_within_size(&mut self) -> bool {
        let k = self.current.len();
        let n = self.n;

        // Rightmost index that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.current[i] < n - k + i) else {
            return false;
        };

        self.current[pos] += 1;
        for i in pos + 1..k {
            self.current[i] = self.current[i - 1] + 1;
        }
        true
    }
}

impl Iterator for IndexSubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.current.is_empty() || !self.advance_within_size() {
            let size = self.current.len() + 1;
            if size > self.n {
                self.finished = true;
                return None;
            }
            self.current = (0..size).collect();
        }

        Some(self.current.clone())
    }
}

/// Iterator over the character sequences selected by every non-empty
/// index subset, each preserving the original relative order.
#[derive(Debug, Clone)]
pub struct Subsets {
    letters: Vec<char>,
    indices: IndexSubsets,
}

impl Subsets {
    pub fn new(letters: &[char]) -> Self {
        Self {
            letters: letters.to_vec(),
            indices: IndexSubsets::new(letters.len()),
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.next()?;
        Some(indices.into_iter().map(|i| self.letters[i]).collect())
    }
}

/// The base sequences fed to the permutation generator
#[derive(Debug, Clone)]
pub enum BaseSequences {
    /// The whole input, once
    Full(Option<Vec<char>>),
    /// Every non-empty subset of the input
    Subsets(Subsets),
}

impl BaseSequences {
    pub fn new(letters: &[char], subset_mode: bool) -> Self {
        if subset_mode {
            Self::Subsets(Subsets::new(letters))
        } else {
            Self::Full(Some(letters.to_vec()))
        }
    }

    /// Total number of bases this iterator yields, if it fits in a `u64`
    pub fn total(letters: usize, subset_mode: bool) -> Option<u64> {
        if subset_mode {
            u32::try_from(letters)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .map(|n| n - 1)
        } else {
            Some(1)
        }
    }
}

impl Iterator for BaseSequences {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Full(full) => full.take(),
            Self::Subsets(subsets) => subsets.next(),
        }
    }
}
