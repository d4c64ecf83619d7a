//! Error type shared by the scanner, driver, and configuration loader.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid UTF-8.
    #[error("'{}' is not valid UTF-8 (line {line})", path.display())]
    Decode { path: PathBuf, line: usize },
    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("invalid value '{value}' for {flag} (expected {expected})")]
    Flag {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}
