//! Command-line interface definition for permute
//!
//! Provides argument parsing and conversion into a pipeline configuration.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::dictionary::DEFAULT_DICTIONARY;
use crate::error::{PermuteError, Result};
use crate::pipeline::{PipelineConfig, SortOrder};

/// Anagram solver: every arrangement of a set of letters
///
/// Permutes the given letters (optionally every subset of them), keeps the
/// arrangements found in a word list, and prints them one per line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "permute",
    version,
    about = "Enumerate every permutation of a set of letters, filtered against a word list",
    long_about = r#"
Enumerate every permutation of a set of letters, filtered against a word list.

The number of candidates grows factorially: 8 letters give 40,320
arrangements, 10 letters 3,628,800, and --subset adds every smaller
selection on top. Keep inputs short.

EXAMPLES:
    # Anagrams of "listen" found in /usr/share/dict/words
    permute listen

    # Every word of 4 letters or more that can be built from "retains"
    permute --subset --min-length 4 --sort-length retains

    # All raw arrangements, no dictionary
    permute --dictonly=false abc
"#
)]
pub struct Args {
    /// Letters to permute
    #[arg(value_name = "LETTERS")]
    pub letters: Option<String>,

    /// Only return permutations found in the dictionary
    #[arg(
        long = "dictonly",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub dict_only: bool,

    /// Path to the dictionary file (one word per line)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DICTIONARY)]
    pub dict: PathBuf,

    /// Return only words of at least N characters
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub min_length: usize,

    /// Return only words of at most N characters
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub max_length: usize,

    /// Permute every non-empty subset of the letters
    #[arg(
        long,
        visible_alias = "any-length",
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub subset: bool,

    /// Return words in length order, not lexical order
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub sort_length: bool,

    /// Keep duplicate words (faster, output may repeat)
    #[arg(long, default_value_t = false)]
    pub no_dedup: bool,

    /// Emit words in generation order instead of sorting
    #[arg(long, default_value_t = false, conflicts_with = "sort_length")]
    pub no_sort: bool,

    /// Keep only words matching this regex pattern
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Print a summary of the run to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Show a progress bar over base sequences on stderr
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// The letters to permute; missing or empty is a usage error
    pub fn letters(&self) -> Result<&str> {
        match self.letters.as_deref() {
            Some(letters) if !letters.is_empty() => Ok(letters),
            _ => Err(PermuteError::Usage),
        }
    }

    /// Output order selected by the flags
    pub fn sort_order(&self) -> SortOrder {
        if self.no_sort {
            SortOrder::Generation
        } else if self.sort_length {
            SortOrder::LengthThenLexical
        } else {
            SortOrder::Lexical
        }
    }

    /// Log level selected by the flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }
}

impl PipelineConfig {
    /// Pipeline settings selected by the flags. The pattern is compiled
    /// (and rejected if invalid) by `Pipeline::new`.
    pub fn from_args(args: &Args) -> Self {
        Self {
            dict_only: args.dict_only,
            min_length: args.min_length,
            max_length: args.max_length,
            subset: args.subset,
            dedupe: !args.no_dedup,
            order: args.sort_order(),
            pattern: args.pattern.clone(),
        }
    }
}
