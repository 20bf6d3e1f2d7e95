//! Anonymize command implementation
//!
//! This module implements the `anonymize` command: read a `{"examples": [...]}`
//! dataset, run it through the configured scrubbers and write the same shape back.

use crate::anonymization::AnonymizerPipeline;
use crate::config::{load_config_or_default, override_scrubbers};
use crate::domain::{Dataset, ScrubError};
use clap::Args;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Path value meaning stdin or stdout
const STDIO: &str = "-";

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input dataset JSON file (`-` for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file for the anonymized dataset (`-` for stdout)
    #[arg(short, long, default_value = STDIO)]
    pub output: String,

    /// Override scrubber categories (comma-separated)
    #[arg(long)]
    pub scrubbers: Option<String>,

    /// Override the tagging model file
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Dry run - anonymize and report without writing the output dataset
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, output = %self.output, "Starting anonymize command");

        match self.run(config_path) {
            Ok(()) => Ok(0),
            Err(e) => {
                crate::log_error_with_context!(&e, "Anonymize command failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }

    fn run(&self, config_path: &str) -> crate::domain::Result<()> {
        let mut config = load_config_or_default(config_path)?;

        if let Some(ref scrubbers) = self.scrubbers {
            tracing::info!(scrubbers = %scrubbers, "Overriding scrubbers from CLI");
            override_scrubbers(&mut config, scrubbers)?;
        }

        if let Some(ref model) = self.model {
            tracing::info!(model = %model.display(), "Overriding tagging model from CLI");
            config.anonymization.model_path = Some(model.clone());
            config.anonymization.validate()?;
        }

        if self.dry_run {
            config.anonymization.dry_run = true;
        }

        let pipeline = AnonymizerPipeline::from_config(&config.anonymization)?;
        pipeline.context().warm_up()?;

        let dataset = Dataset::from_json_str(&self.read_input()?)?;
        let (output, report) = pipeline.anonymize_with_report(&dataset)?;

        if let Some(ref path) = self.report {
            report.write_to_file(path)?;
            eprintln!("✅ Report written to {}", path.display());
        }

        if config.anonymization.dry_run {
            eprintln!("🔍 DRY RUN MODE - anonymized dataset not written");
            eprintln!("{}", report.format_console());
            return Ok(());
        }

        self.write_output(&output.to_json_pretty()?)?;
        eprintln!(
            "✅ Anonymized {} examples ({} placeholders)",
            report.total_examples, report.total_replacements
        );

        Ok(())
    }

    fn read_input(&self) -> crate::domain::Result<String> {
        if self.input == STDIO {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            std::fs::read_to_string(&self.input).map_err(|e| {
                ScrubError::Io(format!("Failed to read input {}: {e}", self.input))
            })
        }
    }

    fn write_output(&self, content: &str) -> crate::domain::Result<()> {
        if self.output == STDIO {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
            Ok(())
        } else {
            std::fs::write(&self.output, format!("{content}\n")).map_err(|e| {
                ScrubError::Io(format!("Failed to write output {}: {e}", self.output))
            })
        }
    }
}
