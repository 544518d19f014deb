//! JSON formatter.

use super::{sorted, Formatter};
use crate::error::FormatError;
use crate::types::{Extra, Rule, RuleMatch, StructuredError};
use serde::Serialize;

/// Pretty-printed JSON formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<&'a RuleMatch>,
    errors: &'a [StructuredError],
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(
        &self,
        _rules: &[Rule],
        matches: &[RuleMatch],
        errors: &[StructuredError],
        _extra: &Extra,
    ) -> Result<String, FormatError> {
        let output = JsonOutput {
            results: sorted(matches),
            errors,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, Severity, SourceLines};

    #[test]
    fn renders_results_in_display_order_with_errors() {
        let matches = vec![
            RuleMatch::new(
                "py.rule1",
                "b.py",
                Position::new(3, 5),
                Severity::Error,
                SourceLines::single("foo()"),
            ),
            RuleMatch::new(
                "-",
                "a.py",
                Position::new(1, 1),
                Severity::Warning,
                SourceLines::single("bar()"),
            )
            .with_message("ad-hoc"),
        ];
        let errors = vec![StructuredError {
            code: 3,
            level: Severity::Warning,
            kind: "Syntax error".to_string(),
            message: "bad token".to_string(),
            path: Some("c.py".into()),
        }];

        let out = JsonFormatter::new()
            .render(&[], &matches, &errors, &Extra::new())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["results"][0]["path"], "a.py");
        assert_eq!(value["results"][0]["check_id"], "-");
        assert_eq!(value["results"][0]["message"], "ad-hoc");
        assert_eq!(value["results"][1]["severity"], "error");
        assert_eq!(value["results"][1]["start"]["col"], 5);
        assert_eq!(value["results"][1]["lines"][0], "foo()");
        assert_eq!(value["errors"][0]["type"], "Syntax error");
    }

    #[test]
    fn empty_input_renders_empty_arrays() {
        let out = JsonFormatter::new()
            .render(&[], &[], &[], &Extra::new())
            .unwrap();
        insta::assert_snapshot!(out, @r#"
        {
          "results": [],
          "errors": []
        }
        "#);
    }
}
