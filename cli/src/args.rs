//! Command line definition.

use clap::{Parser, Subcommand};

/// Default cap on input file size: 10 MiB.
///
/// The diff runs in quadratic time and space when inputs have little in
/// common, so unbounded files are refused rather than ground through.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Character-level diffs for Unicode text.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two inputs and print an inline character diff.
    Diff {
        /// Old input: a file path, or literal text with --text.
        first: String,
        /// New input: a file path, or literal text with --text.
        second: String,
        /// Treat the inputs as literal text instead of file paths.
        #[arg(long)]
        text: bool,
        /// Print the raw edit script as JSON instead of rendering it.
        #[arg(long)]
        json: bool,
        /// Refuse input files larger than this many bytes.
        #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
        max_bytes: u64,
    },
}
