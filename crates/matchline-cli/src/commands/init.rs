//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# matchline configuration

[output]
# Output format: "emacs" (default) or "json"
format = "emacs"

# Write output to a file instead of stdout
# file = "findings.txt"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default(Path::new("matchline.toml"), force)?;

    println!("Created matchline.toml");
    println!("\nNext steps:");
    println!("  1. Edit matchline.toml to pick an output format");
    println!("  2. Run: matchline format findings.json");

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
