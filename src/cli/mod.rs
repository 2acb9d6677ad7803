//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

/// Input file used when the caller supplies no filenames.
pub const DEFAULT_INPUT_FILE: &str = "text.txt";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "textconv")]
#[command(about = "Convert text files line by line with locale-aware parsing")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input text files to convert; each produces a sibling `<name>.out`
    #[arg()]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Filenames to process. An empty invocation falls back to the
    /// single default input file.
    pub fn input_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from(DEFAULT_INPUT_FILE)]
        } else {
            self.files.clone()
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message
    pub fn show_success(message: &str) {
        println!("✓ {}", message);
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}
