//! Configuration types for matchline.

use crate::formatter::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for matchline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Output format, falling back to the default when unset.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

/// Where and how rendered output is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format name (e.g., "emacs").
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// File to write output to instead of stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format(), OutputFormat::Emacs);
        assert!(config.output.file.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[output]
format = "json"
file = "out/findings.json"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.format(), OutputFormat::Json);
        assert_eq!(config.output.file, Some(PathBuf::from("out/findings.json")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse");
        assert_eq!(config.format(), OutputFormat::Emacs);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Config::parse("[output]\nformat = \"sarif\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
