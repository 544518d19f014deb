//! Emacs-style formatter: one colon-delimited line per match.
//!
//! Format: `path:line:col:severity(check_id):first source line`
//!
//! The `(check_id)` suffix is dropped for ad-hoc pattern matches and for
//! ids whose last segment is empty.

use super::{sorted, Formatter};
use crate::error::FormatError;
use crate::types::{Extra, Rule, RuleMatch, StructuredError};
use tracing::debug;

/// Compiler-diagnostic style formatter for editor integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmacsFormatter;

impl EmacsFormatter {
    /// Creates a new emacs formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the five display fields of a match, in output order.
    ///
    /// An empty check id (an id ending in `.`, or an empty id) gets no
    /// `(...)` suffix, same as an ad-hoc match.
    #[must_use]
    pub fn display_fields(rule_match: &RuleMatch) -> [String; 5] {
        let severity = match rule_match.rule_id.check_id() {
            Some(check_id) if !check_id.is_empty() => {
                format!("{}({check_id})", rule_match.severity)
            }
            _ => rule_match.severity.to_string(),
        };
        [
            rule_match.path.display().to_string(),
            rule_match.start.line.to_string(),
            rule_match.start.col.to_string(),
            severity,
            rule_match.lines.first().trim_end().to_string(),
        ]
    }

    /// Renders matches sorted by `(path, rule id)`, one per line.
    ///
    /// No trailing newline; an empty slice yields an empty string.
    #[must_use]
    pub fn render_matches(matches: &[RuleMatch]) -> String {
        debug!("Rendering {} match(es) as emacs lines", matches.len());
        sorted(matches)
            .into_iter()
            .map(|m| Self::display_fields(m).join(":"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formatter for EmacsFormatter {
    fn name(&self) -> &'static str {
        "emacs"
    }

    fn render(
        &self,
        _rules: &[Rule],
        matches: &[RuleMatch],
        _errors: &[StructuredError],
        _extra: &Extra,
    ) -> Result<String, FormatError> {
        Ok(Self::render_matches(matches))
    }
}
