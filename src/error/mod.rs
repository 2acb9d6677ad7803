//! Error types for the conversion pipeline.
//!
//! Every failure is caught at the boundary nearest its origin and turned
//! into a log report; nothing here is fatal to the process.

use std::path::{Path, PathBuf};

/// Per-file error taxonomy.
///
/// Configuration problems (missing or malformed settings) never surface
/// here — the settings loader falls back to defaults instead. Char-index
/// misses are data outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("could not convert {path}: file not found")]
    FileNotFound { path: PathBuf },

    #[error("file {path} not found during read: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("could not write {path}: {message}")]
    OutputWrite { path: PathBuf, message: String },

    #[error("unknown source culture '{name}'")]
    UnknownCulture { name: String },
}

impl ConvertError {
    pub fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    pub fn output_write(path: &Path, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    pub fn unknown_culture(name: &str) -> Self {
        Self::UnknownCulture {
            name: name.to_string(),
        }
    }

    /// Create a user-friendly message for per-file diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("could not convert {}", path.display())
            }
            Self::Unreadable { path, .. } => {
                format!("file {} not found during read", path.display())
            }
            other => other.to_string(),
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
