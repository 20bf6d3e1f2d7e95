//! Anonymization module for Textscrub
//!
//! This module turns free-text examples into anonymized examples by replacing
//! identifying spans with bracketed placeholders such as `[LOCATION]`.
//!
//! # Architecture
//!
//! The anonymization pipeline consists of:
//! - **Normalization**: regex rewrites that collapse tokenizer spacing artifacts
//! - **Scrubbers**: one per category, each re-tagging its input through the shared tagger
//! - **Audit**: structured per-example log with hashed input text
//! - **Report**: summary of placeholders emitted over a run
//!
//! # Usage
//!
//! ```rust,ignore
//! use textscrub::anonymization::{AnonymizerPipeline, AnonymizationConfig};
//!
//! let config = AnonymizationConfig::default();
//! let pipeline = AnonymizerPipeline::from_config(&config)?;
//! let anonymized = pipeline.anonymize(&dataset)?;
//! ```

pub mod audit;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod scrubber;

// Re-export main types
pub use config::AnonymizationConfig;
pub use models::{ScrubCategory, ScrubbedExample};
pub use normalizer::TextNormalizer;
pub use pipeline::AnonymizerPipeline;
pub use report::AnonymizationReport;
pub use scrubber::{LocationScrubber, Scrubber};
