//! Dictionary lookup
//!
//! A word list is loaded once, one word per line, and queried by exact
//! string equality. No case folding or trimming is applied: `"Cat"` in the
//! file does not make `"cat"` a word.

use ahash::RandomState;
use hashbrown::HashSet;
use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding::{detect_encoding, DecodedLines};
use crate::error::{PermuteError, Result};

/// Conventional system word list location
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Read-only set of known words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String, RandomState>,
    source_bytes: u64,
}

impl Dictionary {
    /// Load a newline-delimited word list from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|source| PermuteError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let info = detect_encoding(&content);
        let mut words = HashSet::with_capacity_and_hasher(content.len() / 8, RandomState::new());
        words.extend(DecodedLines::new(&content, &info));

        log::debug!(
            "Loaded {} words from {:?} ({}, confidence {:.1})",
            words.len(),
            path,
            info.name,
            info.confidence
        );

        Ok(Self {
            words,
            source_bytes: content.len() as u64,
        })
    }

    /// Build a dictionary from words already in memory
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::with_hasher(RandomState::new());
        set.extend(words.into_iter().map(Into::into));
        Self {
            words: set,
            source_bytes: 0,
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the file the words were read from (0 when built in memory)
    pub fn source_bytes(&self) -> u64 {
        self.source_bytes
    }
}

/// A dictionary that is read from disk on first use.
///
/// Loading happens at most once, even when `get` races on several threads:
/// every caller blocks until the set is fully built and then sees the same
/// instance. A failed load is reported to the caller that triggered it and
/// leaves the cell empty.
#[derive(Debug)]
pub struct LazyDictionary {
    path: PathBuf,
    cell: OnceCell<Dictionary>,
}

impl LazyDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Wrap a dictionary that is already loaded
    pub fn preloaded(dictionary: Dictionary) -> Self {
        Self {
            path: PathBuf::new(),
            cell: OnceCell::with_value(dictionary),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the word list has been read yet
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The loaded dictionary, reading it first if needed
    pub fn get(&self) -> Result<&Dictionary> {
        self.cell.get_or_try_init(|| Dictionary::load(&self.path))
    }

    /// Membership test, loading the word list on first call
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.get()?.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_and_lookup() {
        let file = word_file(&["cat", "act", "tac"]);
        let dict = Dictionary::load(file.path()).unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("tac"));
        assert!(!dict.contains("atc"));
        assert!(dict.source_bytes() > 0);
    }

    #[test]
    fn test_lookup_is_exact() {
        let dict = Dictionary::from_words(["Cat", "dog "]);

        assert!(dict.contains("Cat"));
        assert!(!dict.contains("cat"));
        assert!(dict.contains("dog "));
        assert!(!dict.contains("dog"));
    }

    #[test]
    fn test_crlf_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\r\nact\r\n").unwrap();
        file.flush().unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert!(dict.contains("cat"));
        assert!(dict.contains("act"));
        assert!(!dict.contains("cat\r"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Dictionary::load(Path::new("/definitely/not/here/words")).unwrap_err();
        match err {
            PermuteError::DictionaryLoad { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/words"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_lazy_dictionary_loads_on_first_use() {
        let file = word_file(&["cat"]);
        let lazy = LazyDictionary::new(file.path());

        assert!(!lazy.is_loaded());
        assert!(lazy.contains("cat").unwrap());
        assert!(lazy.is_loaded());
        assert!(!lazy.contains("dog").unwrap());
    }

    #[test]
    fn test_lazy_dictionary_loads_once() {
        let mut file = word_file(&["cat"]);
        let lazy = LazyDictionary::new(file.path());
        assert!(lazy.contains("cat").unwrap());

        // Later changes to the file are not observed
        writeln!(file, "dog").unwrap();
        file.flush().unwrap();
        assert!(!lazy.contains("dog").unwrap());
        assert_eq!(lazy.get().unwrap().len(), 1);
    }

    #[test]
    fn test_lazy_dictionary_failure_is_reported() {
        let lazy = LazyDictionary::new("/definitely/not/here/words");
        assert!(lazy.contains("cat").is_err());
        assert!(!lazy.is_loaded());
    }

    #[test]
    fn test_lazy_dictionary_concurrent_init() {
        let words: Vec<String> = (0..5000).map(|i| format!("word{}", i)).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let file = word_file(&refs);
        let lazy = LazyDictionary::new(file.path());

        let sizes: Vec<usize> = (0..64)
            .into_par_iter()
            .map(|i| {
                assert!(lazy.contains(&format!("word{}", i)).unwrap());
                lazy.get().unwrap().len()
            })
            .collect();

        assert!(sizes.iter().all(|&n| n == 5000));

        let first = lazy.get().unwrap() as *const Dictionary;
        let again = lazy.get().unwrap() as *const Dictionary;
        assert_eq!(first, again);
    }

    #[test]
    fn test_preloaded() {
        let lazy = LazyDictionary::preloaded(Dictionary::from_words(["cat"]));
        assert!(lazy.is_loaded());
        assert!(lazy.contains("cat").unwrap());
    }
}
