//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Textscrub configuration file and its tagging model.

use crate::config::load_config;
use crate::nlp::NlpContext;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Skip loading the tagging model
    #[arg(long)]
    pub skip_model: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        if !self.skip_model {
            let ctx = NlpContext::new(config.anonymization.tagger_source());
            match ctx.warm_up() {
                Ok(()) => println!("✅ Tagging model loaded"),
                Err(e) => {
                    println!("❌ Failed to load tagging model");
                    println!("   Error: {e}");
                    return Ok(e.exit_code());
                }
            }
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Scrubbers: {}", config.anonymization.scrubbers.join(", "));
        println!(
            "  Tagging Model: {}",
            config
                .anonymization
                .model_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string())
        );
        println!(
            "  Audit Log: {}",
            if config.anonymization.audit.enabled {
                config.anonymization.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();

        Ok(0)
    }
}
