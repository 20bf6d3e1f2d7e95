//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Textscrub using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Textscrub - Free-text anonymization pipeline
#[derive(Parser, Debug)]
#[command(name = "textscrub")]
#[command(version, about, long_about = None)]
#[command(author = "Textscrub Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "textscrub.toml", env = "TEXTSCRUB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TEXTSCRUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a `{"examples": [...]}` dataset
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file and tagging model
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command and return its exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Anonymize(args) => args.execute(&self.config),
            Commands::ValidateConfig(args) => args.execute(&self.config),
            Commands::Init(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from(["textscrub", "anonymize", "--input", "data.json"]);
        assert_eq!(cli.config, "textscrub.toml");
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.input, "data.json");
                assert_eq!(args.output, "-");
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_anonymize_overrides() {
        let cli = Cli::parse_from([
            "textscrub",
            "anonymize",
            "-i",
            "-",
            "-o",
            "out.json",
            "--scrubbers",
            "location",
            "--dry-run",
            "--report",
            "report.json",
        ]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.input, "-");
                assert_eq!(args.output, "out.json");
                assert_eq!(args.scrubbers.as_deref(), Some("location"));
                assert!(args.dry_run);
                assert!(args.report.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_anonymize_requires_input() {
        assert!(Cli::try_parse_from(["textscrub", "anonymize"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "textscrub",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["textscrub", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
