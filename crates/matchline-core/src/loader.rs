//! Loading findings produced by the analysis engine.

use crate::error::InputError;
use crate::types::Findings;
use std::path::Path;
use tracing::debug;

impl Findings {
    /// Parses findings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a match has no source lines.
    pub fn from_json_str(content: &str) -> Result<Self, InputError> {
        let findings: Self = serde_json::from_str(content).map_err(|e| InputError::Parse {
            message: e.to_string(),
        })?;
        debug!(
            "Loaded {} match(es), {} error(s), {} rule(s)",
            findings.matches.len(),
            findings.errors.len(),
            findings.rules.len()
        );
        Ok(findings)
    }

    /// Loads findings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }
}
