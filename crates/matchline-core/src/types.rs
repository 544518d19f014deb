//! Core types for match records and formatter inputs.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Rule id reserved for matches produced by an ad-hoc pattern given on the
/// command line rather than a named rule.
pub const AD_HOC_RULE_ID: &str = "-";

/// Severity level of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding.
    #[serde(alias = "INFO")]
    Info,
    /// Finding that should be addressed.
    #[serde(alias = "WARNING")]
    Warning,
    /// Finding that must be fixed.
    #[serde(alias = "ERROR")]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source position (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Identifier of the rule that produced a match.
///
/// Equality, ordering and hashing follow the raw text returned by
/// [`RuleId::as_str`], so an ad-hoc id sorts exactly where its sentinel
/// string would.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleId {
    /// Dot-separated rule id, e.g. `python.lang.correctness.foo`.
    Hierarchical(String),
    /// Match from a one-off pattern with no named rule.
    AdHoc,
}

impl RuleId {
    /// Resolves a raw id as emitted by the analysis engine.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::from(raw.to_string())
    }

    /// Returns the raw id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hierarchical(id) => id,
            Self::AdHoc => AD_HOC_RULE_ID,
        }
    }

    /// Returns the short check id: the last dot-segment of a hierarchical id.
    #[must_use]
    pub fn check_id(&self) -> Option<&str> {
        match self {
            Self::Hierarchical(id) => Some(id.rsplit('.').next().unwrap_or(id)),
            Self::AdHoc => None,
        }
    }
}

impl From<String> for RuleId {
    fn from(raw: String) -> Self {
        if raw == AD_HOC_RULE_ID {
            Self::AdHoc
        } else {
            Self::Hierarchical(raw)
        }
    }
}

impl From<&str> for RuleId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<RuleId> for String {
    fn from(id: RuleId) -> Self {
        match id {
            RuleId::Hierarchical(id) => id,
            RuleId::AdHoc => AD_HOC_RULE_ID.to_string(),
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for RuleId {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RuleId {}

impl PartialOrd for RuleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for RuleId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// Non-empty, ordered source lines covered by a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SourceLines {
    first: String,
    rest: Vec<String>,
}

impl SourceLines {
    /// Creates a single-line sequence.
    #[must_use]
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            first: line.into(),
            rest: Vec::new(),
        }
    }

    /// Returns the first covered line, untrimmed.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Number of lines (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.rest.iter().map(String::as_str))
    }
}

impl TryFrom<Vec<String>> for SourceLines {
    type Error = InputError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        let mut lines = lines.into_iter();
        let first = lines.next().ok_or(InputError::EmptyLines)?;
        Ok(Self {
            first,
            rest: lines.collect(),
        })
    }
}

impl From<SourceLines> for Vec<String> {
    fn from(lines: SourceLines) -> Self {
        let mut out = Vec::with_capacity(lines.len());
        out.push(lines.first);
        out.extend(lines.rest);
        out
    }
}

/// A single finding produced by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Rule that matched.
    #[serde(rename = "check_id")]
    pub rule_id: RuleId,
    /// File containing the match.
    pub path: PathBuf,
    /// Start of the match.
    pub start: Position,
    /// Severity of the match.
    pub severity: Severity,
    /// Source lines covered by the match.
    pub lines: SourceLines,
    /// Rule message, if the engine supplied one.
    #[serde(default)]
    pub message: String,
}

impl RuleMatch {
    /// Creates a new match with an empty message.
    #[must_use]
    pub fn new(
        rule_id: impl Into<RuleId>,
        path: impl Into<PathBuf>,
        start: Position,
        severity: Severity,
        lines: SourceLines,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            path: path.into(),
            start,
            severity,
            lines,
            message: String::new(),
        }
    }

    /// Sets the message for this match.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// A rule definition known to the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule id.
    pub id: RuleId,
    /// Message template shown for matches.
    #[serde(default)]
    pub message: String,
    /// Default severity.
    pub severity: Severity,
}

/// A structured error reported by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct StructuredError {
    /// Numeric error code.
    #[serde(default)]
    pub code: i32,
    /// Error level.
    pub level: Severity,
    /// Error kind (e.g. "Syntax error").
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// File the error relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Open-ended auxiliary data passed to formatters.
pub type Extra = BTreeMap<String, serde_json::Value>;

/// Everything a formatter receives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    /// Rule definitions (order not significant).
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Matches (order not significant).
    #[serde(default, alias = "results")]
    pub matches: Vec<RuleMatch>,
    /// Structured errors.
    #[serde(default)]
    pub errors: Vec<StructuredError>,
    /// Extension mapping.
    #[serde(default)]
    pub extra: Extra,
}

impl Findings {
    /// Creates an empty set of findings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Counts matches by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.matches
            .iter()
            .fold((0, 0, 0), |(e, w, i), m| match m.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }
}
