//! Error types for the permutation pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermuteError {
    /// Missing or empty letters argument
    #[error("usage: permute letters")]
    Usage,

    /// The word list could not be opened or read
    #[error("failed to load dictionary {}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dictionary filtering was requested but no dictionary was supplied
    #[error("dictionary filtering is enabled but no dictionary was provided")]
    MissingDictionary,

    #[error("invalid regex pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

impl PermuteError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PermuteError::Usage => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PermuteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_usage_exit_code() {
        assert_eq!(PermuteError::Usage.exit_code(), 2);
        assert_eq!(PermuteError::MissingDictionary.exit_code(), 1);
    }

    #[test]
    fn test_dictionary_load_names_path() {
        let err = PermuteError::DictionaryLoad {
            path: PathBuf::from("/nowhere/words"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let message = err.to_string();
        assert!(message.contains("/nowhere/words"));
        let cause = err.source().map(|e| e.to_string()).unwrap_or_default();
        assert!(cause.contains("No such file or directory"));
        assert_eq!(err.exit_code(), 1);
    }
}
