use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fixtures::TargetKind;

#[derive(Parser, Debug)]
#[command(
    name = "invoke-bench",
    about = "Invoke bench - compares the overhead of call strategies against a reflective baseline",
    version,
    author
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time every call strategy and report its overhead
    Run {
        /// Calls per timed run
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Number of timed runs averaged together
        #[arg(short, long)]
        average_over: Option<u32>,

        /// Integer argument passed to every call
        #[arg(short, long, allow_negative_numbers = true)]
        param: Option<i64>,

        /// Target kinds to benchmark (repeatable, defaults to all)
        #[arg(short, long, value_enum)]
        kind: Vec<TargetKind>,

        /// Output format
        #[arg(short, long)]
        output: Option<OutputFormat>,

        /// Save output to file
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show configuration information
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed human-readable output
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// Compact JSON output
    JsonCompact,
    /// Table format
    Table,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonCompact => write!(f, "json-compact"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_kinds() {
        let args = Args::try_parse_from([
            "invoke-bench",
            "run",
            "--iterations",
            "500",
            "--kind",
            "static",
            "--kind",
            "closure",
            "-o",
            "json-compact",
        ])
        .unwrap();

        match args.command {
            Commands::Run {
                iterations,
                kind,
                output,
                average_over,
                ..
            } => {
                assert_eq!(iterations, Some(500));
                assert_eq!(average_over, None);
                assert_eq!(kind, vec![TargetKind::Static, TargetKind::Closure]);
                assert_eq!(output, Some(OutputFormat::JsonCompact));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["invoke-bench", "-q", "-v", "run"]).is_err());
    }
}
