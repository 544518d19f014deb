//! Output formatters for findings.
//!
//! Every formatter is driven through the [`Formatter`] trait so that the
//! output layer can pick one by name and call it with the same arguments.

mod emacs;
mod json;

pub use emacs::EmacsFormatter;
pub use json::JsonFormatter;

use crate::error::FormatError;
use crate::types::{Extra, Findings, Rule, RuleMatch, StructuredError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Renders findings to text.
///
/// Formatters receive the full set of inputs even when they only look at
/// the matches.
pub trait Formatter: Send + Sync {
    /// Returns the name this formatter is selected by (e.g., "emacs").
    fn name(&self) -> &'static str;

    /// Renders the given findings.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced.
    fn render(
        &self,
        rules: &[Rule],
        matches: &[RuleMatch],
        errors: &[StructuredError],
        extra: &Extra,
    ) -> Result<String, FormatError>;

    /// Renders a [`Findings`] bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced.
    fn render_findings(&self, findings: &Findings) -> Result<String, FormatError> {
        self.render(
            &findings.rules,
            &findings.matches,
            &findings.errors,
            &findings.extra,
        )
    }
}

/// Type alias for boxed `Formatter` trait objects.
pub type FormatterBox = Box<dyn Formatter>;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per match, `path:line:col:severity(check):source`.
    #[default]
    Emacs,
    /// Pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// All formats, in display order.
    pub const ALL: [Self; 2] = [Self::Emacs, Self::Json];

    /// Returns the formatter for this format.
    #[must_use]
    pub fn formatter(self) -> FormatterBox {
        match self {
            Self::Emacs => Box::new(EmacsFormatter::new()),
            Self::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns a brief description of the format.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Emacs => "One line per match, compiler-diagnostic style",
            Self::Json => "Machine-readable JSON with results and errors",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emacs => write!(f, "emacs"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown output format: {s}"))
    }
}

/// Orders matches by `(path, rule id)`.
///
/// Ties keep their input order when used with a stable sort; line and
/// column are not consulted.
fn by_path_then_rule(a: &RuleMatch, b: &RuleMatch) -> Ordering {
    a.path
        .cmp(&b.path)
        .then_with(|| a.rule_id.cmp(&b.rule_id))
}

/// Returns references to `matches` in display order.
fn sorted(matches: &[RuleMatch]) -> Vec<&RuleMatch> {
    let mut sorted: Vec<&RuleMatch> = matches.iter().collect();
    sorted.sort_by(|a, b| by_path_then_rule(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, Severity, SourceLines};

    fn make_match(path: &str, id: &str, line: usize) -> RuleMatch {
        RuleMatch::new(
            id,
            path,
            Position::new(line, 1),
            Severity::Warning,
            SourceLines::single("x"),
        )
    }

    #[test]
    fn output_format_round_trips_through_names() {
        for format in OutputFormat::ALL {
            let parsed: OutputFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
            assert_eq!(format.formatter().name(), format.to_string());
        }
    }

    #[test]
    fn output_format_parse_is_case_insensitive() {
        assert_eq!("EMACS".parse::<OutputFormat>(), Ok(OutputFormat::Emacs));
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn default_format_is_emacs() {
        assert_eq!(OutputFormat::default(), OutputFormat::Emacs);
    }

    #[test]
    fn sort_uses_path_then_rule_only() {
        let matches = vec![
            make_match("b.py", "r.a", 1),
            make_match("a.py", "r.b", 9),
            make_match("a.py", "r.a", 5),
            make_match("a.py", "r.a", 2),
        ];
        let order: Vec<(String, usize)> = sorted(&matches)
            .into_iter()
            .map(|m| (m.path.display().to_string(), m.start.line))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.py".to_string(), 5),
                ("a.py".to_string(), 2),
                ("a.py".to_string(), 9),
                ("b.py".to_string(), 1),
            ]
        );
    }

    #[test]
    fn paths_compare_by_component() {
        // "a/b" has first component "a", which precedes "a.b".
        let matches = vec![make_match("a.b", "r", 1), make_match("a/b", "r", 2)];
        let first = sorted(&matches)[0];
        assert_eq!(first.start.line, 2);
    }
}
