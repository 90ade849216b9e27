//! Permute - anagram solver
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;
use std::time::Instant;

use permute::cli::Args;
use permute::dictionary::LazyDictionary;
use permute::error::PermuteError;
use permute::output::WordWriter;
use permute::permutations::factorial;
use permute::pipeline::{Pipeline, PipelineConfig};
use permute::progress::{
    create_base_progress_bar, print_error, print_header, print_info, print_warning, RunSummary,
};
use permute::subsets::BaseSequences;

/// Above this many candidates a warning is printed before starting
const LARGE_RUN_CANDIDATES: u128 = 100_000_000;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        let code = exit_code(&e);

        if let Some(PermuteError::Usage) = e.downcast_ref::<PermuteError>() {
            eprintln!("{}", e);
            process::exit(code);
        }

        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(code);
    }
}

/// Process exit status for a failed run
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PermuteError>()
        .map_or(1, PermuteError::exit_code)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let started = Instant::now();
    let letters = args.letters()?;
    let config = PipelineConfig::from_args(args);

    if args.verbose {
        print_config(args, &config);
    }

    let letter_count = letters.chars().count();
    if !args.quiet {
        warn_if_large(letter_count, config.subset);
    }

    let dictionary = LazyDictionary::new(&args.dict);
    let pipeline = Pipeline::new(config, Some(&dictionary))?;

    let output = if args.progress {
        let pb = create_base_progress_bar(BaseSequences::total(letter_count, args.subset));
        let result = pipeline.run_with_progress(letters, |_| pb.inc(1));
        pb.finish_and_clear();
        result?
    } else {
        pipeline.run(letters)?
    };

    // Nothing reaches stdout until the whole pipeline has succeeded
    let stdout = io::stdout();
    let mut writer = WordWriter::new(stdout.lock());
    writer
        .write_all(&output.words)
        .map_err(PermuteError::Output)?;
    writer.flush().map_err(PermuteError::Output)?;
    let written = (writer.lines_written(), writer.bytes_written());
    drop(writer);

    if args.stats {
        let dictionary = if dictionary.is_loaded() {
            dictionary.get().ok().map(|d| (d.len(), d.source_bytes()))
        } else {
            None
        };
        RunSummary {
            stats: &output.stats,
            dictionary,
            written,
            started,
        }
        .print();
    }

    Ok(())
}

/// Warn before runs whose candidate count is enormous
fn warn_if_large(letters: usize, subset: bool) {
    let candidates = if subset {
        // sum over k of C(n, k) * k! is bounded above by e * n!
        factorial(letters).map(|f| f.saturating_mul(3))
    } else {
        factorial(letters)
    };

    match candidates {
        Some(n) if n <= LARGE_RUN_CANDIDATES => {}
        _ => print_warning(&format!(
            "{} letters produce more than {} candidates; this may take a very long time",
            letters, LARGE_RUN_CANDIDATES
        )),
    }
}

/// Print configuration summary
fn print_config(args: &Args, config: &PipelineConfig) {
    print_header("Configuration");

    print_info(&format!("Letters:      {:?}", args.letters.as_deref().unwrap_or_default()));
    if config.dict_only {
        print_info(&format!("Dictionary:   {:?}", args.dict));
    } else {
        print_info("Dictionary:   disabled");
    }
    print_info(&format!("Lengths:      {}-{}", config.min_length, config.max_length));
    if let Some(ref pattern) = config.pattern {
        print_info(&format!("Pattern:      {}", pattern));
    }
    print_info(&format!("Subsets:      {}", config.subset));
    print_info(&format!("Dedup:        {}", config.dedupe));
    print_info(&format!("Order:        {:?}", config.order));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_exits_with_2() {
        let err = anyhow::Error::from(PermuteError::Usage);
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_dictionary_failure_exits_with_1() {
        let err = anyhow::Error::from(PermuteError::DictionaryLoad {
            path: "/missing/words".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_context_keeps_exit_code() {
        let err = anyhow::Error::from(PermuteError::Usage).context("while starting");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_foreign_error_exits_with_1() {
        assert_eq!(exit_code(&anyhow::anyhow!("something else")), 1);
    }
}
