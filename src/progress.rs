//! Progress display module
//!
//! Everything here writes to stderr; stdout carries nothing but words.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

use crate::pipeline::PipelineStats;

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled progress bar over base sequences.
///
/// `total` is `None` when the number of bases does not fit a counter; a
/// spinner is shown instead.
pub fn create_base_progress_bar(total: Option<u64>) -> ProgressBar {
    let pb = match total {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} bases ({percent}%) {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓░"),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} bases {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
            );
            pb
        }
    };

    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run summary printed with `--stats`
pub struct RunSummary<'a> {
    pub stats: &'a PipelineStats,
    /// Words and source size of the loaded dictionary, if one was read
    pub dictionary: Option<(usize, u64)>,
    /// Lines and bytes written to stdout
    pub written: (u64, u64),
    pub started: Instant,
}

impl RunSummary<'_> {
    pub fn print(&self) {
        let stats = self.stats;
        let elapsed = self.started.elapsed();

        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                    PERMUTATION SUMMARY".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        if let Some((words, bytes)) = self.dictionary {
            eprintln!(
                "  {} {} words ({})",
                "Dictionary:      ".green(),
                format_number(words as u64),
                ByteSize(bytes)
            );
        }
        eprintln!("  {} {}", "Bases permuted:  ".green(), format_number(stats.bases));
        if stats.bases_skipped > 0 {
            eprintln!("  {} {}", "Bases skipped:   ".green(), format_number(stats.bases_skipped));
        }
        eprintln!("  {} {}", "Candidates:      ".green(), format_number(stats.candidates));
        eprintln!("  {} {}", "Not in dictionary:".yellow(), format_number(stats.dictionary_rejected));
        eprintln!("  {} {}", "Wrong length:    ".yellow(), format_number(stats.length_rejected));
        if stats.pattern_rejected > 0 {
            eprintln!("  {} {}", "Pattern mismatch:".yellow(), format_number(stats.pattern_rejected));
        }
        eprintln!("  {} {}", "Duplicates:      ".yellow(), format_number(stats.duplicates));
        eprintln!(
            "  {} {}",
            "Words emitted:   ".green().bold(),
            format_number(stats.accepted).green().bold()
        );
        let (lines, bytes) = self.written;
        eprintln!(
            "  {} {} lines ({})",
            "Output:          ".green(),
            format_number(lines),
            ByteSize(bytes)
        );

        eprintln!();
        eprintln!("  {} {}", "Duration:        ".green(), format_duration(elapsed));
        eprintln!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
