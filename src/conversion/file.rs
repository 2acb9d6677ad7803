//! Per-file conversion: line preparation, conversion and output writing.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::conversion::line::{convert_line, render_output_line};
use crate::error::{ConvertError, ConvertResult};
use crate::locale::Culture;
use crate::settings::Settings;

/// Suffix appended to an input file name to form its sibling output name.
pub const OUTPUT_SUFFIX: &str = ".out";

/// Map an input file into its sibling output file (`<name>.out`).
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Lazy sequence of prepared input lines.
///
/// Blank lines (empty after trimming) are dropped, kept lines are
/// trimmed, and one synthetic trailing element carries the decimal count
/// of kept lines. The sequence is finite and non-restartable; a read
/// fault ends it with the error and suppresses the trailing count.
pub struct PreparedLines<R> {
    lines: Lines<R>,
    kept: usize,
    finished: bool,
}

impl<R: BufRead> PreparedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            kept: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for PreparedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.kept += 1;
                    return Some(Ok(trimmed.to_string()));
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    return Some(Ok(self.kept.to_string()));
                }
            }
        }
    }
}

/// Convert one named file end-to-end, writing `<name>.out` next to it.
///
/// Any failure is reported through the logging sink before being returned
/// to the caller, so batch processing only has to count outcomes.
pub fn convert_file(path: &Path, settings: &Settings) -> ConvertResult<()> {
    let outcome = run_conversion(path, settings);
    if let Err(err) = &outcome {
        error!("{}", err.user_message());
    }
    outcome
}

fn run_conversion(path: &Path, settings: &Settings) -> ConvertResult<()> {
    if !path.exists() {
        return Err(ConvertError::file_not_found(path));
    }

    // The culture is resolved per invocation and stays local to this
    // task; concurrent files never observe each other's locale.
    let culture = Culture::resolve(&settings.source_culture_name)
        .ok_or_else(|| ConvertError::unknown_culture(&settings.source_culture_name))?;

    if settings.verbose {
        info!("processing file {}", path.display());
        info!("source culture {}", culture.name);
    }

    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(err) => return Err(ConvertError::unreadable(path, err)),
    };

    // The whole output is accumulated before the first write so a read
    // fault leaves no partial output file behind.
    let mut output_lines = Vec::new();
    for line in PreparedLines::new(reader) {
        let line = line.map_err(|err| ConvertError::unreadable(path, err))?;
        let converted = convert_line(&line, culture);
        output_lines.push(render_output_line(&converted));
    }

    let output = output_path(path);
    write_output(&output, &output_lines).map_err(|err| ConvertError::output_write(&output, err))
}

/// Write all output lines, in order, with a trailing newline per line,
/// replacing any prior content.
fn write_output(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
