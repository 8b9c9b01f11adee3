//! Command-line interface definitions.
//!
//! Defines the CLI structure for the hindsight binary using `clap`.

pub mod check;
pub mod evaluate;
pub mod list;
pub mod output;
pub mod submit;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prediction registration and tolerance-matching engine
#[derive(Parser, Debug)]
#[command(name = "hindsight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a prediction for a submitter
    Submit(SubmitArgs),

    /// List recorded predictions in submission order
    List,

    /// Evaluate all predictions against an observed value (owner only)
    Evaluate(EvaluateArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for the `submit` subcommand.
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Submitter identity
    #[arg(short, long)]
    pub submitter: String,

    /// Predicted value
    #[arg(long, allow_negative_numbers = true)]
    pub value: i64,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Observed real-world value
    #[arg(short, long, allow_negative_numbers = true)]
    pub actual: i64,

    /// Identity triggering the evaluation
    #[arg(long)]
    pub caller: String,
}

/// Subcommands for `hindsight check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_with_negative_value() {
        let cli = Cli::parse_from(["hindsight", "submit", "--submitter", "u1", "--value", "-42"]);
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.submitter, "u1");
                assert_eq!(args.value, -42);
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn parses_evaluate_with_global_flags() {
        let cli = Cli::parse_from([
            "hindsight",
            "evaluate",
            "--actual",
            "105",
            "--caller",
            "O",
            "--json",
            "-c",
            "custom.toml",
        ]);
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(
            cli.command,
            Commands::Evaluate(EvaluateArgs { actual: 105, .. })
        ));
    }

    #[test]
    fn config_defaults_to_config_toml() {
        let cli = Cli::parse_from(["hindsight", "list"]);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn rejects_non_integer_value() {
        let result = Cli::try_parse_from(["hindsight", "submit", "-s", "u1", "--value", "1.5"]);
        assert!(result.is_err());
    }
}
