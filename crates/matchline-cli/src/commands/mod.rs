//! Subcommand implementations.

pub mod format;
pub mod init;
pub mod list_formats;
pub mod output;
