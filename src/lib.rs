//! # Permute
//!
//! Anagram solver for word puzzles and scripting.
//!
//! ## Features
//!
//! - **Exhaustive permutations**: Heap's algorithm, every arrangement of the input
//! - **Subset mode**: permute every non-empty selection of the letters as well
//! - **Dictionary filtering**: keep only words from a newline-delimited word list
//! - **Length and pattern filters**: inclusive length bounds, optional regex
//! - **Deduplication and ordering**: lexical, length-then-lexical, or generation order
//!
//! Run time and memory grow factorially with the number of letters.
//!
//! ## Usage
//!
//! ```bash
//! # Anagrams of "listen"
//! permute listen
//!
//! # Words of any length built from "retains", shortest first
//! permute --subset --sort-length retains
//! ```
//!
//! ## Example
//!
//! ```rust
//! use permute::dictionary::{Dictionary, LazyDictionary};
//! use permute::pipeline::{Pipeline, PipelineConfig};
//!
//! let dictionary = LazyDictionary::preloaded(Dictionary::from_words(["cat", "act"]));
//! let pipeline = Pipeline::new(PipelineConfig::default(), Some(&dictionary)).unwrap();
//!
//! let output = pipeline.run("tca").unwrap();
//! assert_eq!(output.words, vec!["act", "cat"]);
//! ```

pub mod cli;
pub mod dedup;
pub mod dictionary;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod permutations;
pub mod pipeline;
pub mod progress;
pub mod subsets;

pub use cli::Args;
pub use dictionary::{Dictionary, LazyDictionary};
pub use error::PermuteError;
pub use pipeline::{Pipeline, PipelineConfig, PipelineOutput, SortOrder};
