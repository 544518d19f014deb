//! Integration test: findings JSON → formatter output.
//!
//! Uses `tests/fixtures/findings.json`, shaped the way the analysis engine
//! hands its results over.

use matchline_core::{EmacsFormatter, Findings, Formatter, OutputFormat};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_fixture() -> Findings {
    Findings::from_file(&fixture("findings.json")).expect("fixture findings should load")
}

#[test]
fn emacs_output_matches_fixture() {
    let findings = load_fixture();
    let out = EmacsFormatter::new()
        .render_findings(&findings)
        .expect("emacs rendering never fails");

    insta::assert_snapshot!(out, @r"
    src/app.py:7:1:info:print(debug)
    src/app.py:3:4:warning(useless-eqeq):if x == x:
    src/handlers.py:42:9:error(eval-detected):        eval(payload)
    ");
}

#[test]
fn registry_selects_emacs_by_name() {
    let findings = load_fixture();
    let format: OutputFormat = "emacs".parse().expect("emacs is a known format");
    let via_registry = format
        .formatter()
        .render_findings(&findings)
        .expect("render should succeed");

    assert_eq!(via_registry, EmacsFormatter::render_matches(&findings.matches));
    assert_eq!(via_registry.lines().count(), findings.matches.len());
}

#[test]
fn every_line_has_expected_severity_field() {
    let findings = load_fixture();
    let out = EmacsFormatter::render_matches(&findings.matches);

    for line in out.lines() {
        let severity = line.splitn(5, ':').nth(3).expect("line has a severity field");
        let bare = severity.split('(').next().unwrap_or(severity);
        assert!(
            ["error", "warning", "info"].contains(&bare),
            "unexpected severity field {severity:?} in {line:?}"
        );
    }
}

#[test]
fn input_order_does_not_change_output() {
    let findings = load_fixture();
    let mut reversed = findings.clone();
    reversed.matches.reverse();

    assert_eq!(
        EmacsFormatter::render_matches(&findings.matches),
        EmacsFormatter::render_matches(&reversed.matches)
    );
}

#[test]
fn json_output_keeps_errors() {
    let findings = load_fixture();
    let out = OutputFormat::Json
        .formatter()
        .render_findings(&findings)
        .expect("json render should succeed");
    let value: serde_json::Value = serde_json::from_str(&out).expect("output is valid JSON");

    assert_eq!(value["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["errors"][0]["path"], "src/broken.py");
}
