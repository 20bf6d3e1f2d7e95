//! Anonymization configuration

use crate::anonymization::models::ScrubCategory;
use crate::domain::{Result, ScrubError};
use crate::nlp::TaggerSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Anonymization pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Scrubber categories, applied in this order
    #[serde(default = "default_scrubbers")]
    pub scrubbers: Vec<String>,

    /// Path to a lexicon model TOML file (embedded model when unset)
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Anonymize without writing output or audit entries
    #[serde(default)]
    pub dry_run: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_scrubbers() -> Vec<String> {
    vec![ScrubCategory::Location.name().to_string()]
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            scrubbers: default_scrubbers(),
            model_path: None,
            dry_run: false,
            audit: AuditConfig::default(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.categories()?;

        if let Some(ref path) = self.model_path {
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(ScrubError::Configuration(format!(
                    "Tagging model must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        self.audit.validate()
    }

    /// Parse the configured scrubber names
    pub fn categories(&self) -> Result<Vec<ScrubCategory>> {
        self.scrubbers.iter().map(|name| name.parse()).collect()
    }

    /// Where the tagging model is loaded from
    pub fn tagger_source(&self) -> TaggerSource {
        match self.model_path {
            Some(ref path) => TaggerSource::File(path.clone()),
            None => TaggerSource::Embedded,
        }
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_SCRUBBERS") {
            self.scrubbers = parse_list(&val);
        }

        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_MODEL_PATH") {
            self.model_path = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_DRY_RUN") {
            self.dry_run = parse_bool("TEXTSCRUB_ANONYMIZATION_DRY_RUN", &val)?;
        }

        self.audit.apply_env_overrides()
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err(ScrubError::Configuration(
                "anonymization.audit.log_path cannot be empty when audit is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_AUDIT_ENABLED") {
            self.enabled = parse_bool("TEXTSCRUB_ANONYMIZATION_AUDIT_ENABLED", &val)?;
        }

        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("TEXTSCRUB_ANONYMIZATION_AUDIT_JSON_FORMAT") {
            self.json_format = parse_bool("TEXTSCRUB_ANONYMIZATION_AUDIT_JSON_FORMAT", &val)?;
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping empty entries
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    value
        .trim()
        .parse()
        .map_err(|_| ScrubError::Configuration(format!("Invalid {var} value: {value}")))
}
