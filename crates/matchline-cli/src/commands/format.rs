//! Format command implementation.

use anyhow::{Context, Result};
use matchline_core::{Config, Findings, OutputFormat};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;

/// Options for the format command, as given on the command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Findings file, or `-` for stdin.
    pub input: PathBuf,
    /// Format override.
    pub format: Option<OutputFormat>,
    /// Destination override.
    pub output: Option<PathBuf>,
}

/// Runs the format command and returns the number of matches rendered.
pub fn run(options: &Options, source: &ConfigSource) -> Result<usize> {
    let config = load_config(source)?;
    let findings = read_findings(&options.input)?;

    for error in &findings.errors {
        match &error.path {
            Some(path) => tracing::warn!("{} ({}): {error}", error.level, path.display()),
            None => tracing::warn!("{}: {error}", error.level),
        }
    }

    let format = options.format.unwrap_or_else(|| config.format());
    let destination = options
        .output
        .clone()
        .or_else(|| config.output.file.clone());

    let (errors, warnings, infos) = findings.count_by_severity();
    tracing::info!(
        "Rendering {} error(s), {} warning(s), {} info(s) as {format}",
        errors,
        warnings,
        infos
    );

    let rendered = format
        .formatter()
        .render_findings(&findings)
        .with_context(|| format!("Failed to render {format} output"))?;

    super::output::write(&rendered, destination.as_deref())?;

    Ok(findings.matches.len())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

fn read_findings(input: &Path) -> Result<Findings> {
    if input == Path::new("-") {
        let content =
            std::io::read_to_string(std::io::stdin()).context("Failed to read findings from stdin")?;
        return Findings::from_json_str(&content).context("Invalid findings on stdin");
    }
    Findings::from_file(input)
        .with_context(|| format!("Failed to load findings: {}", input.display()))
}
