//! Writing rendered output to its destination.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes rendered output to `destination`, or stdout when `None`.
///
/// Files receive the rendered text unchanged. Stdout gets a trailing
/// newline unless the output is empty.
pub fn write(rendered: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!("Wrote output to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            write_terminated(rendered, &mut stdout.lock()).context("Failed to write to stdout")
        }
    }
}

fn write_terminated<W: Write>(rendered: &str, writer: &mut W) -> std::io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{rendered}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stdout_output_is_newline_terminated() {
        let mut buf = Vec::new();
        write_terminated("a.py:1:1:error(r):x", &mut buf).unwrap();
        assert_eq!(buf, b"a.py:1:1:error(r):x\n");
    }

    #[test]
    fn empty_output_writes_nothing() {
        let mut buf = Vec::new();
        write_terminated("", &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn file_output_is_written_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/out.txt");
        write("line1\nline2", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line1\nline2");
    }
}
