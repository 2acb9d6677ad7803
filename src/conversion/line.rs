//! Per-line conversion: ordered fallback across three interpretations.

use crate::locale::{self, Culture};

/// Convert one prepared input line to its output value.
///
/// Interpretations are tried in strict priority order — numeric, then
/// date/time, then char-index instruction — and the first match wins.
/// Parsing follows the active culture; the returned value is always
/// rendered in invariant form. A char-index miss produces the empty
/// string rather than an error, so every input line yields exactly one
/// output line.
pub fn convert_line(line: &str, culture: &Culture) -> String {
    if let Some(number) = culture.parse_number(line) {
        return locale::format_number(number);
    }
    if let Some(date_time) = culture.parse_date_time(line) {
        return locale::format_date_time(date_time);
    }
    convert_as_char_index(line).unwrap_or_default()
}

/// Interpret `line` as `"<index> <text>"` and return the character of
/// `text` at `index`.
///
/// Returns `None` on bad arity, a non-integer index or an out-of-bounds
/// index. Tokens beyond the second are ignored. Indexing counts Unicode
/// scalar values.
fn convert_as_char_index(line: &str) -> Option<String> {
    let mut parts = line.split_whitespace();
    let index: usize = parts.next()?.parse().ok()?;
    let text = parts.next()?;
    text.chars().nth(index).map(|c| c.to_string())
}

/// Render a converted value as an output line, `"<length> <value>"`.
///
/// The length counts characters of the value, so an empty placeholder
/// renders as `"0 "` and keeps the output aligned with the input.
pub fn render_output_line(converted: &str) -> String {
    format!("{} {}", converted.chars().count(), converted)
}
