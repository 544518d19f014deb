//! Errors raised while building formatter inputs or rendering them.

use miette::Diagnostic;
use std::path::PathBuf;

/// Errors reading or validating findings.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum InputError {
    /// IO error reading a findings file.
    #[error("Failed to read findings file {path}: {source}")]
    #[diagnostic(code(matchline::input::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Findings are not valid JSON or do not match the expected shape.
    #[error("Failed to parse findings: {message}")]
    #[diagnostic(
        code(matchline::input::parse),
        help("expected an object with `rules`, `matches`, `errors` and `extra` keys")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A match record carries no source lines.
    #[error("match record has no source lines")]
    #[diagnostic(
        code(matchline::input::empty_lines),
        help("every match must cover at least one source line")
    )]
    EmptyLines,
}

/// Errors raised by a formatter.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
