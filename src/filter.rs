//! Candidate filtering module
//!
//! Length bounds and an optional regex pattern applied to every candidate
//! that survived the dictionary check.

use regex::Regex;

use crate::error::{PermuteError, Result};

/// Why a candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    Pattern,
}

/// Filter configuration
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    /// Shortest accepted word, in characters
    pub min_length: usize,
    /// Longest accepted word, in characters
    pub max_length: usize,
    /// Regex pattern to match (None means no pattern filter)
    pub pattern: Option<Regex>,
}

impl CandidateFilter {
    /// Create a new filter configuration
    pub fn new(min_length: usize, max_length: usize, pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => Some(compile_pattern(p)?),
            _ => None,
        };

        Ok(Self {
            min_length,
            max_length,
            pattern,
        })
    }

    /// Check a candidate, reporting the first stage that rejects it
    #[inline]
    pub fn check(&self, word: &str) -> std::result::Result<(), Rejection> {
        let word_len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };

        if word_len < self.min_length || word_len > self.max_length {
            return Err(Rejection::Length);
        }

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(word) {
                return Err(Rejection::Pattern);
            }
        }

        Ok(())
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }

    /// Whether any word of `len` characters could pass the length bounds
    pub fn admits_length(&self, len: usize) -> bool {
        (self.min_length..=self.max_length).contains(&len)
    }
}

/// Compile a user pattern, naming it in the error
fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PermuteError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
