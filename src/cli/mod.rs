//! Command-line interface for `ew`.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;
pub mod render;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "ew",
    version,
    about = "Everyday Winners: walk the credit-education lesson path from a terminal",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output on stdout
    #[arg(long, global = true, env = "EW_ROBOT")]
    pub robot: bool,

    /// Output format (human, json, jsonl)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Explicit config file (skips global and project config)
    #[arg(long, global = true, env = "EW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// `--format` wins; `--robot` alone means JSON.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        match (self.format, self.robot) {
            (Some(format), _) => format,
            (None, true) => OutputFormat::Json,
            (None, false) => OutputFormat::Human,
        }
    }

    /// Whether errors and logs should be machine-readable.
    #[must_use]
    pub fn is_robot(&self) -> bool {
        self.output_format().is_robot()
    }
}
