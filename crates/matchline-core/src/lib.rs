//! # matchline-core
//!
//! Match records and output formatters for static-analysis findings.
//!
//! This crate provides:
//!
//! - [`RuleMatch`] and friends, the typed records an analysis engine hands over
//! - [`Formatter`] trait shared by all output formats
//! - [`EmacsFormatter`] for one-line-per-match, compiler-diagnostic style output
//! - [`JsonFormatter`] for machine-readable output
//!
//! ## Example
//!
//! ```
//! use matchline_core::{EmacsFormatter, Position, RuleMatch, Severity, SourceLines};
//!
//! let matches = vec![RuleMatch::new(
//!     "python.lang.correctness.useless-eqeq",
//!     "app.py",
//!     Position::new(3, 5),
//!     Severity::Warning,
//!     SourceLines::single("x == x  \n"),
//! )];
//!
//! assert_eq!(
//!     EmacsFormatter::render_matches(&matches),
//!     "app.py:3:5:warning(useless-eqeq):x == x"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod formatter;
mod loader;
mod types;

pub use config::{Config, ConfigError, OutputConfig};
pub use error::{FormatError, InputError};
pub use formatter::{EmacsFormatter, Formatter, FormatterBox, JsonFormatter, OutputFormat};
pub use types::{
    Extra, Findings, Position, Rule, RuleId, RuleMatch, Severity, SourceLines, StructuredError,
    AD_HOC_RULE_ID,
};
