//! Batch driver: one conversion task per input file, joined at the end.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::error;

use crate::cli::CliUtils;
use crate::conversion::file::convert_file;
use crate::error::ConvertError;
use crate::settings::Settings;

/// Outcome of one batch run.
#[derive(Debug)]
pub struct BatchSummary {
    /// Files whose output was written.
    pub converted: usize,
    /// Files that failed, with their reported failure.
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of files that reached a terminal state.
    pub fn total(&self) -> usize {
        self.converted + self.failures.len()
    }
}

/// Convert every named file concurrently and wait for all of them.
///
/// Each file runs as its own task; a failing file never cancels or
/// affects its siblings. Per-file diagnostics are reported by the file
/// converter as they occur; after the join, one aggregate notice is
/// emitted when anything failed, and the summary is returned instead of
/// re-raising the individual failures.
pub fn convert_batch(filenames: &[PathBuf], settings: &Settings) -> BatchSummary {
    let progress = CliUtils::create_progress_bar(filenames.len() as u64);

    let outcomes: Vec<(PathBuf, Result<(), ConvertError>)> = filenames
        .par_iter()
        .map(|path| {
            let outcome = convert_file(path, settings);
            progress.inc(1);
            (path.clone(), outcome)
        })
        .collect();

    progress.finish_and_clear();

    let mut summary = BatchSummary {
        converted: 0,
        failures: Vec::new(),
    };
    for (path, outcome) in outcomes {
        match outcome {
            Ok(()) => summary.converted += 1,
            Err(err) => summary.failures.push((path, err)),
        }
    }

    if !summary.all_succeeded() {
        error!("invalid input encountered");
    }
    summary
}
