//! Locale definitions used for parsing input lines.
//!
//! A [`Culture`] describes the numeric and date/time conventions of one
//! locale. Parsing always follows the active culture; rendering of
//! converted values is always invariant (see [`format_number`] and
//! [`format_date_time`]), so the same input file converted under the same
//! culture produces identical output everywhere.

use chrono::{NaiveDate, NaiveDateTime};

/// Date/time formats accepted for every culture, tried after the
/// culture-specific ones.
const UNIVERSAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const UNIVERSAL_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Invariant rendering of a date/time, `MM/DD/YYYY HH:MM:SS`.
const INVARIANT_DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Numeric and date/time conventions for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Culture {
    /// Locale identifier, e.g. `en-US` or `ru-RU`.
    pub name: &'static str,
    /// Decimal separator accepted in numeric input.
    pub decimal_separator: char,
    /// Digit group separator accepted in numeric input.
    pub group_separator: char,
    /// Date/time formats for this locale, tried in order.
    date_time_formats: &'static [&'static str],
    /// Date-only formats for this locale, tried in order.
    date_formats: &'static [&'static str],
}

const INVARIANT: Culture = Culture {
    name: "invariant",
    decimal_separator: '.',
    group_separator: ',',
    date_time_formats: &[
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %I:%M:%S %p",
        "%m/%d/%Y %I:%M %p",
    ],
    date_formats: &["%m/%d/%Y"],
};

/// Registered cultures, looked up case-insensitively by name.
const CULTURES: &[Culture] = &[
    Culture {
        name: "en-US",
        decimal_separator: '.',
        group_separator: ',',
        date_time_formats: &[
            "%m/%d/%Y %H:%M:%S",
            "%m/%d/%Y %H:%M",
            "%m/%d/%Y %I:%M:%S %p",
            "%m/%d/%Y %I:%M %p",
        ],
        date_formats: &["%m/%d/%Y"],
    },
    Culture {
        name: "en-GB",
        decimal_separator: '.',
        group_separator: ',',
        date_time_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"],
        date_formats: &["%d/%m/%Y"],
    },
    Culture {
        name: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        date_time_formats: &["%d.%m.%Y %H:%M:%S", "%d.%m.%Y %H:%M"],
        date_formats: &["%d.%m.%Y"],
    },
    Culture {
        name: "fr-FR",
        decimal_separator: ',',
        group_separator: '\u{00a0}',
        date_time_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"],
        date_formats: &["%d/%m/%Y"],
    },
    Culture {
        name: "ru-RU",
        decimal_separator: ',',
        group_separator: '\u{00a0}',
        date_time_formats: &["%d.%m.%Y %H:%M:%S", "%d.%m.%Y %H:%M"],
        date_formats: &["%d.%m.%Y"],
    },
    Culture {
        name: "es-ES",
        decimal_separator: ',',
        group_separator: '.',
        date_time_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"],
        date_formats: &["%d/%m/%Y"],
    },
    Culture {
        name: "it-IT",
        decimal_separator: ',',
        group_separator: '.',
        date_time_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"],
        date_formats: &["%d/%m/%Y"],
    },
    Culture {
        name: "pt-BR",
        decimal_separator: ',',
        group_separator: '.',
        date_time_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"],
        date_formats: &["%d/%m/%Y"],
    },
    Culture {
        name: "ja-JP",
        decimal_separator: '.',
        group_separator: ',',
        date_time_formats: &["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"],
        date_formats: &["%Y/%m/%d"],
    },
];

impl Culture {
    /// Look up a registered culture by name, case-insensitively.
    pub fn resolve(name: &str) -> Option<&'static Culture> {
        CULTURES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The invariant culture: `.` decimal separator, `,` group separator,
    /// month-first dates.
    pub fn invariant() -> &'static Culture {
        &INVARIANT
    }

    /// Names of every registered culture.
    pub fn registered_names() -> impl Iterator<Item = &'static str> {
        CULTURES.iter().map(|c| c.name)
    }

    /// Parse a complete string as a floating-point number under this
    /// culture's conventions.
    ///
    /// Accepts an optional sign, digits with group separators in strict
    /// groups of three, at most one decimal separator, and an optional
    /// `e`/`E` exponent. Returns `None` when any other character appears
    /// or the grouping is irregular, so a dotted date like `15.03.2024`
    /// is not mistaken for a grouped integer under dot-grouping cultures.
    pub fn parse_number(&self, input: &str) -> Option<f64> {
        if input.is_empty() {
            return None;
        }

        let mut normalized = String::with_capacity(input.len());
        let rest = if let Some(stripped) = input.strip_prefix('-') {
            normalized.push('-');
            stripped
        } else {
            input.strip_prefix('+').unwrap_or(input)
        };

        // The exponent marker is invariant across cultures.
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };

        let mut parts = mantissa.split(self.decimal_separator);
        let integral = parts.next()?;
        let fraction = parts.next();
        if parts.next().is_some() {
            return None;
        }

        if !self.push_integral(integral, &mut normalized) {
            return None;
        }
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            normalized.push('.');
            normalized.push_str(fraction);
        }
        if let Some(exponent) = exponent {
            let digits = exponent
                .strip_prefix(['-', '+'])
                .unwrap_or(exponent);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            normalized.push('e');
            normalized.push_str(exponent);
        }

        normalized.parse::<f64>().ok()
    }

    /// Validate the integral part of a numeric string and append its
    /// digits to `out`. An empty integral part is allowed so that inputs
    /// like `,5` parse as `0.5`.
    fn push_integral(&self, integral: &str, out: &mut String) -> bool {
        if integral.is_empty() {
            return true;
        }

        let mut groups = integral.split(self.group_separator);
        let first = match groups.next() {
            Some(first) => first,
            None => return false,
        };
        if first.is_empty()
            || first.len() > 3 && integral.contains(self.group_separator)
            || !first.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        out.push_str(first);

        for group in groups {
            if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            out.push_str(group);
        }
        true
    }

    /// Parse a complete string as a date/time value under this culture's
    /// conventions. Date-only input resolves to midnight.
    pub fn parse_date_time(&self, input: &str) -> Option<NaiveDateTime> {
        for format in self
            .date_time_formats
            .iter()
            .chain(UNIVERSAL_DATE_TIME_FORMATS)
        {
            if let Ok(value) = NaiveDateTime::parse_from_str(input, format) {
                return Some(value);
            }
        }
        for format in self.date_formats.iter().chain(UNIVERSAL_DATE_FORMATS) {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
        None
    }
}

/// Render a number in invariant decimal form (`.` separator, shortest
/// representation that round-trips).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Render a date/time in the fixed invariant form `MM/DD/YYYY HH:MM:SS`.
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(INVARIANT_DATE_TIME_FORMAT).to_string()
}
