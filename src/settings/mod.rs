//! Runtime settings loaded from `settings.json`.
//!
//! The settings value is constructed once at startup and shared read-only
//! by every conversion task. A missing or malformed settings file is
//! reported and replaced by [`Settings::default`], never treated as fatal.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::error;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Culture used when no settings file supplies one.
pub const DEFAULT_CULTURE: &str = "en-US";

/// Immutable runtime settings shared by all conversion tasks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Locale used to parse numeric and date/time lines.
    pub source_culture_name: String,
    /// Emit informational traces while converting.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_culture_name: DEFAULT_CULTURE.to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn new(source_culture_name: impl Into<String>, verbose: bool) -> Self {
        Self {
            source_culture_name: source_culture_name.into(),
            verbose,
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing file and unparseable content both fall back to the
    /// defaults; each case is reported through the logging sink so the
    /// run itself continues.
    pub fn load(path: &Path) -> Settings {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                error!("settings file {} is missing, using defaults", path.display());
                return Settings::default();
            }
            Err(err) => {
                error!(
                    "settings file {} could not be read ({}), using defaults",
                    path.display(),
                    err
                );
                return Settings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                error!(
                    "settings file {} is malformed ({}), using defaults",
                    path.display(),
                    err
                );
                Settings::default()
            }
        }
    }
}
