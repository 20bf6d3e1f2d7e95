//! Configuration management for Textscrub.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Textscrub uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TEXTSCRUB_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textscrub::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("textscrub.toml")?;
//! println!("Scrubbers: {}", config.anonymization.scrubbers.join(", "));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`AnonymizationConfig`] - Scrubbers, tagging model and audit log
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! scrubbers = ["location"]
//! # model_path = "models/en_core_lexicon.toml"
//!
//! [anonymization.audit]
//! enabled = true
//! log_path = "${TEXTSCRUB_AUDIT_DIR}/anonymization.log"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::anonymization::config::{AnonymizationConfig, AuditConfig};
pub use loader::{load_config, load_config_or_default, override_scrubbers};
pub use schema::{ApplicationConfig, LoggingConfig, ScrubConfig};
