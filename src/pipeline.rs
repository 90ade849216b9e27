//! Core result pipeline
//!
//! Runs the permutation generator over every base sequence, filters the
//! candidates against the dictionary, the length bounds and the optional
//! pattern, drops duplicates and orders what is left.
//!
//! The work is exhaustive: an n-letter input produces n! candidates, and
//! subset mode adds every smaller selection on top. Nothing here caps that;
//! callers decide how many letters they are willing to pay for.

use std::cmp::Ordering;

use crate::dedup::create_deduplicator;
use crate::dictionary::LazyDictionary;
use crate::error::{PermuteError, Result};
use crate::filter::{CandidateFilter, Rejection};
use crate::permutations::Permutations;
use crate::subsets::BaseSequences;

/// Output ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Plain string order
    #[default]
    Lexical,
    /// Shorter words first, string order within a length
    LengthThenLexical,
    /// The order in which candidates were accepted
    Generation,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Keep only candidates found in the dictionary
    pub dict_only: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Permute every non-empty subset of the letters, not just all of them
    pub subset: bool,
    /// Emit each distinct word once
    pub dedupe: bool,
    pub order: SortOrder,
    /// Optional regex every accepted word must match
    pub pattern: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dict_only: true,
            min_length: 0,
            max_length: 20,
            subset: false,
            dedupe: true,
            order: SortOrder::Lexical,
            pattern: None,
        }
    }
}

/// Counters collected while the pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Base sequences permuted
    pub bases: u64,
    /// Bases skipped because no arrangement could pass the length bounds
    pub bases_skipped: u64,
    /// Candidates produced by the permutation generator
    pub candidates: u64,
    pub dictionary_rejected: u64,
    pub length_rejected: u64,
    pub pattern_rejected: u64,
    pub duplicates: u64,
    pub accepted: u64,
}

/// Final ordered words plus the counters that produced them
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub words: Vec<String>,
    pub stats: PipelineStats,
}

pub struct Pipeline<'d> {
    config: PipelineConfig,
    filter: CandidateFilter,
    dictionary: Option<&'d LazyDictionary>,
}

impl<'d> Pipeline<'d> {
    /// Build a pipeline. A dictionary is required when `dict_only` is set
    /// and ignored otherwise; it is not read until the first lookup.
    pub fn new(config: PipelineConfig, dictionary: Option<&'d LazyDictionary>) -> Result<Self> {
        if config.dict_only && dictionary.is_none() {
            return Err(PermuteError::MissingDictionary);
        }

        let dictionary = if config.dict_only { dictionary } else { None };
        let filter = CandidateFilter::new(
            config.min_length,
            config.max_length,
            config.pattern.as_deref(),
        )?;

        Ok(Self {
            config,
            filter,
            dictionary,
        })
    }

    /// Run the full pipeline over `letters`
    pub fn run(&self, letters: &str) -> Result<PipelineOutput> {
        self.run_with_progress(letters, |_| {})
    }

    /// Run the full pipeline, calling `on_base` after each base sequence
    pub fn run_with_progress<F>(&self, letters: &str, mut on_base: F) -> Result<PipelineOutput>
    where
        F: FnMut(&[char]),
    {
        let letters: Vec<char> = letters.chars().collect();
        let mut stats = PipelineStats::default();
        let mut dedup = create_deduplicator(self.config.dedupe);
        let mut found = Vec::new();

        log::debug!(
            "Permuting {} letters ({} mode, {:?} order, dedupe {})",
            letters.len(),
            if self.config.subset { "subset" } else { "full" },
            self.config.order,
            self.config.dedupe
        );

        // A missing word list fails the run even when no base is permuted
        if let Some(dictionary) = self.dictionary {
            if dictionary.get()?.is_empty() {
                log::warn!("Dictionary {:?} contains no words", dictionary.path());
            }
        }

        for base in BaseSequences::new(&letters, self.config.subset) {
            // Every arrangement of a base has the base's length
            if !self.filter.admits_length(base.len()) {
                stats.bases_skipped += 1;
                on_base(&base);
                continue;
            }

            log::trace!("Permuting base {:?}", base.iter().collect::<String>());
            stats.bases += 1;

            for arrangement in Permutations::new(base.clone()) {
                stats.candidates += 1;
                let word: String = arrangement.into_iter().collect();

                if let Some(dictionary) = self.dictionary {
                    if !dictionary.contains(&word)? {
                        stats.dictionary_rejected += 1;
                        continue;
                    }
                }

                match self.filter.check(&word) {
                    Err(Rejection::Length) => {
                        stats.length_rejected += 1;
                        continue;
                    }
                    Err(Rejection::Pattern) => {
                        stats.pattern_rejected += 1;
                        continue;
                    }
                    Ok(()) => {}
                }

                if !dedup.insert(&word) {
                    stats.duplicates += 1;
                    continue;
                }

                found.push(word);
            }

            on_base(&base);
        }

        sort_words(&mut found, self.config.order);
        stats.accepted = found.len() as u64;

        log::debug!(
            "Generated {} candidates from {} bases, accepted {}",
            stats.candidates,
            stats.bases,
            stats.accepted
        );

        Ok(PipelineOutput {
            words: found,
            stats,
        })
    }
}

/// Order words in place
pub fn sort_words(words: &mut [String], order: SortOrder) {
    match order {
        SortOrder::Lexical => words.sort(),
        SortOrder::LengthThenLexical => words.sort_by(|a, b| compare_length_then_lexical(a, b)),
        SortOrder::Generation => {}
    }
}

fn compare_length_then_lexical(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}
