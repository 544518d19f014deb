//! matchline CLI tool.
//!
//! Usage:
//! ```bash
//! matchline format [OPTIONS] [INPUT]
//! matchline list-formats
//! matchline init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use matchline_core::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Render static-analysis findings as text
#[derive(Parser)]
#[command(name = "matchline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render findings in the selected format
    Format {
        /// Findings JSON file ("-" reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output format (overrides config; default: emacs)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 1 if any match was rendered
        #[arg(long)]
        error: bool,
    },

    /// List available output formats
    ListFormats,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Format {
            input,
            format,
            output,
            error,
        } => {
            let cwd = std::env::current_dir()?;
            let source = config_resolver::resolve(&cwd, cli.config.as_deref());
            let options = commands::format::Options {
                input,
                format,
                output,
            };
            let rendered = commands::format::run(&options, &source)?;
            if error && rendered > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListFormats => {
            commands::list_formats::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
