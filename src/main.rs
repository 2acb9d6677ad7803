// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
mod conversion;
mod error;
mod locale;
mod settings;

use crate::cli::{Args, CliUtils};
use crate::conversion::convert_batch;
use crate::settings::{Settings, SETTINGS_FILE};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let files = args.input_files();

    let summary = convert_batch(&files, &settings);

    if summary.all_succeeded() {
        CliUtils::show_success(&format!("converted {} file(s)", summary.converted));
    } else {
        CliUtils::show_error(&format!(
            "converted {} of {} file(s)",
            summary.converted,
            summary.total()
        ));
    }

    // Failures were already reported through the log; the process itself
    // always finishes normally so one bad file cannot fail a batch run.
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
